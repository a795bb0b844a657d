//! Built-in default extra vars.
//!
//! Only settings consumed by the bundled playbooks are defined here; values
//! mirror `hack/ansible/group_vars/all/main.yml`.

use super::VarValue;

/// The baseline extra-vars tree that cluster overrides are merged onto.
///
/// The weavenet manifest URL embeds `$(...)` shell-expansion syntax (with a
/// literal newline inside the `tr` argument), so it is a
/// [`VarValue::QuotedString`] to guarantee a double-quoted scalar in the
/// output file.
pub fn default_extra_vars() -> VarValue {
    mapping([
        (
            "kubernetes",
            mapping([
                (
                    "vip",
                    mapping([
                        ("fqdn", VarValue::string("k8s.example.com")),
                        ("ip", VarValue::string("10.10.10.3")),
                    ]),
                ),
                (
                    "cni",
                    mapping([
                        (
                            "weavenet",
                            mapping([(
                                "manifestUrl",
                                VarValue::quoted(
                                    "https://cloud.weave.works/k8s/net?k8s-version=$(kubectl version | base64 | tr -d '\n')",
                                ),
                            )]),
                        ),
                        (
                            "flannel",
                            mapping([(
                                "manifestUrl",
                                VarValue::string(
                                    "https://raw.githubusercontent.com/coreos/flannel/master/Documentation/kube-flannel.yml",
                                ),
                            )]),
                        ),
                        (
                            "calico",
                            mapping([(
                                "manifestUrl",
                                VarValue::string(
                                    "https://docs.projectcalico.org/v3.1/getting-started/kubernetes/installation/hosted/kubeadm/1.7/calico.yaml",
                                ),
                            )]),
                        ),
                    ]),
                ),
            ]),
        ),
        (
            "kubeadm",
            mapping([
                ("binary", VarValue::string("/usr/bin/kubeadm")),
                ("token", VarValue::string("abcdef.0123456789abcdef")),
            ]),
        ),
    ])
}

fn mapping<const N: usize>(entries: [(&str, VarValue); N]) -> VarValue {
    VarValue::Mapping(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_shape() {
        let defaults = default_extra_vars();
        assert_eq!(
            defaults
                .at(&["kubeadm", "token"])
                .and_then(VarValue::as_str),
            Some("abcdef.0123456789abcdef")
        );
        for plugin in ["weavenet", "flannel", "calico"] {
            assert!(
                defaults
                    .at(&["kubernetes", "cni", plugin, "manifestUrl"])
                    .is_some(),
                "missing manifestUrl for {plugin}"
            );
        }
    }

    #[test]
    fn test_weavenet_url_is_force_quoted() {
        let defaults = default_extra_vars();
        let url = defaults
            .at(&["kubernetes", "cni", "weavenet", "manifestUrl"])
            .unwrap();
        assert!(matches!(url, VarValue::QuotedString(s) if s.contains("$(kubectl")));
    }
}
