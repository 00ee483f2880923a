//! Lookup of previously configured stanzas

use std::path::Path;

use async_trait::async_trait;

use crate::types::{PortName, Stanza};

/// Source of existing per-port configuration.
///
/// A missing stanza is an ordinary outcome, so implementations report every
/// failure as `None`.
#[async_trait]
pub trait MergeResolver: Send + Sync {
    /// Look up the stanza configured for `port` in `reference_path`
    async fn resolve_existing(&self, port: &PortName, reference_path: &Path) -> Option<Stanza>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Resolver knowing one stanza in one reference file
    struct SingleStanza {
        port: PortName,
        reference_path: PathBuf,
    }

    #[async_trait]
    impl MergeResolver for SingleStanza {
        async fn resolve_existing(&self, port: &PortName, reference_path: &Path) -> Option<Stanza> {
            (port == &self.port && reference_path == self.reference_path.as_path())
                .then(|| Stanza::verbatim(format!("iface {port}\n  mtu 9000\n\n")))
        }
    }

    #[tokio::test]
    async fn test_resolver_as_trait_object() {
        let reference = Path::new("/etc/network/interfaces");
        let resolver: Box<dyn MergeResolver> = Box::new(SingleStanza {
            port: PortName::new("swp1").unwrap(),
            reference_path: reference.to_path_buf(),
        });

        let swp1 = PortName::new("swp1").unwrap();
        let swp2 = PortName::new("swp2").unwrap();
        assert_eq!(
            resolver.resolve_existing(&swp1, reference).await,
            Some(Stanza::verbatim("iface swp1\n  mtu 9000\n\n"))
        );
        assert_eq!(resolver.resolve_existing(&swp2, reference).await, None);
        assert_eq!(
            resolver.resolve_existing(&swp1, Path::new("/tmp/other")).await,
            None
        );
    }
}
