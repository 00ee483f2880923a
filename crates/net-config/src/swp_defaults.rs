//! Per-port swp defaults generation

use std::path::Path;

use log::{debug, info};

use ifgen_core::{MergeResolver, PortName, Stanza};

use crate::header::SWP_DEFAULTS_HEADER;

/// Generator for the per-port swp defaults document
pub struct SwpDefaultsGenerator<R> {
    resolver: R,
}

impl<R: MergeResolver> SwpDefaultsGenerator<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Generate one stanza per port in port table order.
    ///
    /// With a reference file, a port keeps its existing stanza when the
    /// resolver finds one and gets the minimal default otherwise.
    pub async fn generate(&self, ports: &[PortName], reference_path: Option<&Path>) -> String {
        let mut output = String::from(SWP_DEFAULTS_HEADER);
        let mut merged = 0usize;

        for port in ports {
            let stanza = match reference_path {
                Some(path) => match self.resolver.resolve_existing(port, path).await {
                    Some(existing) => {
                        debug!("Keeping existing configuration for {}", port);
                        merged += 1;
                        existing
                    }
                    None => {
                        debug!("No existing configuration for {}, using default", port);
                        Stanza::default_for(port)
                    }
                },
                None => Stanza::default_for(port),
            };

            output.push_str(stanza.as_str());
        }

        if let Some(path) = reference_path {
            info!(
                "Merged {} of {} ports from {}",
                merged,
                ports.len(),
                path.display()
            );
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::always;

    /// Resolver that never finds anything
    struct NoExistingConfig;

    #[async_trait]
    impl MergeResolver for NoExistingConfig {
        async fn resolve_existing(&self, _port: &PortName, _reference_path: &Path) -> Option<Stanza> {
            None
        }
    }

    mock! {
        pub Resolver {}

        #[async_trait]
        impl MergeResolver for Resolver {
            async fn resolve_existing(&self, port: &PortName, reference_path: &Path) -> Option<Stanza>;
        }
    }

    fn ports(names: &[&str]) -> Vec<PortName> {
        names.iter().map(|name| PortName::new(*name).unwrap()).collect()
    }

    fn body(output: &str) -> &str {
        assert!(output.starts_with(SWP_DEFAULTS_HEADER));
        &output[SWP_DEFAULTS_HEADER.len()..]
    }

    #[tokio::test]
    async fn test_defaults_without_reference() {
        let generator = SwpDefaultsGenerator::new(NoExistingConfig);
        let output = generator.generate(&ports(&["swp1", "swp2"]), None).await;

        assert_eq!(body(&output), "auto swp1\niface swp1\n\nauto swp2\niface swp2\n\n");
    }

    #[tokio::test]
    async fn test_resolver_not_consulted_without_reference() {
        let mut resolver = MockResolver::new();
        resolver.expect_resolve_existing().never();

        let generator = SwpDefaultsGenerator::new(resolver);
        let output = generator.generate(&ports(&["swp1"]), None).await;
        assert_eq!(body(&output), "auto swp1\niface swp1\n\n");
    }

    #[tokio::test]
    async fn test_merge_keeps_existing_and_defaults_rest() {
        let reference = Path::new("/etc/network/interfaces.d/swp_defaults");

        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve_existing()
            .withf(|port, path| {
                port.as_str() == "swp1"
                    && path == Path::new("/etc/network/interfaces.d/swp_defaults")
            })
            .times(1)
            .returning(|_, _| Some(Stanza::verbatim("iface swp1\n  custom-option x\n")));
        resolver
            .expect_resolve_existing()
            .withf(|port, _| port.as_str() == "swp2")
            .times(1)
            .returning(|_, _| None);

        let generator = SwpDefaultsGenerator::new(resolver);
        let output = generator
            .generate(&ports(&["swp1", "swp2"]), Some(reference))
            .await;

        assert_eq!(
            body(&output),
            "iface swp1\n  custom-option x\nauto swp2\niface swp2\n\n"
        );
    }

    #[tokio::test]
    async fn test_merge_queries_each_port_once() {
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve_existing()
            .with(always(), always())
            .times(3)
            .returning(|_, _| None);

        let generator = SwpDefaultsGenerator::new(resolver);
        let output = generator
            .generate(
                &ports(&["swp3", "swp1", "swp2"]),
                Some(Path::new("/tmp/interfaces")),
            )
            .await;

        assert_eq!(
            body(&output),
            "auto swp3\niface swp3\n\nauto swp1\niface swp1\n\nauto swp2\niface swp2\n\n"
        );
    }
}
