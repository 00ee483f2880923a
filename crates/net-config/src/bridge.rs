//! Untagged bridge stanza generation

use ifgen_core::{PortName, PortTableError, Result};

use crate::header::BRIDGE_DEFAULT_HEADER;

/// Name of the generated bridge
pub const BRIDGE_NAME: &str = "bridge-untagged";

/// Number of member ports listed per `bridge-ports` line
pub const BRIDGE_PORTS_PER_LINE: usize = 5;

const OPTION_INDENT: &str = "  ";
const PORT_LIST_INDENT: &str = "      ";
const LINE_CONTINUATION: &str = " \\\n";

/// Split the member list into indented `bridge-ports` value lines.
///
/// Lines carry neither the continuation marker nor a newline; see
/// [`format_bridge_ports`].
pub fn wrap_bridge_ports(ports: &[PortName], per_line: usize) -> Vec<String> {
    ports
        .chunks(per_line.max(1))
        .map(|chunk| {
            let names: Vec<&str> = chunk.iter().map(PortName::as_str).collect();
            format!("{}{}", PORT_LIST_INDENT, names.join(" "))
        })
        .collect()
}

/// Render the full `bridge-ports` option with line continuations
pub fn format_bridge_ports(ports: &[PortName]) -> String {
    let lines = wrap_bridge_ports(ports, BRIDGE_PORTS_PER_LINE);
    format!(
        "{}bridge-ports{}{}",
        OPTION_INDENT,
        LINE_CONTINUATION,
        lines.join(LINE_CONTINUATION)
    )
}

/// Generate the untagged bridge document containing every port
pub fn generate_bridge_default(ports: &[PortName]) -> Result<String> {
    if ports.is_empty() {
        return Err(PortTableError::EmptyPortList.into());
    }

    log::debug!("Generating {} with {} member ports", BRIDGE_NAME, ports.len());

    let mut output = String::from(BRIDGE_DEFAULT_HEADER);
    output.push_str(&format!("auto {}\n", BRIDGE_NAME));
    output.push_str(&format!("iface {}\n", BRIDGE_NAME));
    output.push_str(&format_bridge_ports(ports));
    output.push('\n');

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifgen_core::IfGenError;

    fn swp_ports(count: usize) -> Vec<PortName> {
        (1..=count)
            .map(|i| PortName::new(format!("swp{}", i)).unwrap())
            .collect()
    }

    #[test]
    fn test_wrap_seven_ports() {
        let lines = wrap_bridge_ports(&swp_ports(7), BRIDGE_PORTS_PER_LINE);
        assert_eq!(
            lines,
            vec![
                "      swp1 swp2 swp3 swp4 swp5".to_string(),
                "      swp6 swp7".to_string(),
            ]
        );
    }

    #[test]
    fn test_wrap_exact_multiple() {
        let lines = wrap_bridge_ports(&swp_ports(5), BRIDGE_PORTS_PER_LINE);
        assert_eq!(lines, vec!["      swp1 swp2 swp3 swp4 swp5".to_string()]);

        let lines = wrap_bridge_ports(&swp_ports(10), BRIDGE_PORTS_PER_LINE);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "      swp6 swp7 swp8 swp9 swp10");
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_bridge_ports(&[], BRIDGE_PORTS_PER_LINE).is_empty());
    }

    #[test]
    fn test_format_bridge_ports() {
        assert_eq!(
            format_bridge_ports(&swp_ports(7)),
            "  bridge-ports \\\n      swp1 swp2 swp3 swp4 swp5 \\\n      swp6 swp7"
        );
        assert_eq!(
            format_bridge_ports(&swp_ports(1)),
            "  bridge-ports \\\n      swp1"
        );
    }

    #[test]
    fn test_generate_bridge_default() {
        let output = generate_bridge_default(&swp_ports(7)).unwrap();

        let expected_body = concat!(
            "auto bridge-untagged\n",
            "iface bridge-untagged\n",
            "  bridge-ports \\\n",
            "      swp1 swp2 swp3 swp4 swp5 \\\n",
            "      swp6 swp7\n",
        );

        assert!(output.starts_with(BRIDGE_DEFAULT_HEADER));
        assert_eq!(&output[BRIDGE_DEFAULT_HEADER.len()..], expected_body);
    }

    #[test]
    fn test_generate_bridge_default_empty() {
        assert!(matches!(
            generate_bridge_default(&[]),
            Err(IfGenError::PortTable(PortTableError::EmptyPortList))
        ));
    }
}
