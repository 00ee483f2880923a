//! Fixed comment headers of generated documents

/// Header of the per-port swp defaults document
pub const SWP_DEFAULTS_HEADER: &str = "
# ** This file is autogenerated by generate-interfaces **
#
# This is /etc/network/interfaces section for all available swp
# ports on the system.
#
# To include this file in the main /etc/network/interfaces file,
# copy this file under /etc/network/interfaces.d/ and use the
# source line in the /etc/network/interfaces file.
#
# example entry in /etc/network/interfaces:
#   source /etc/network/interfaces.d/<filename>
#
# See manpage interfaces(5) for details.

";

/// Header of the untagged bridge document
pub const BRIDGE_DEFAULT_HEADER: &str = "
# ** This file is autogenerated by generate-interfaces **
#
# This is /etc/network/interfaces section for a bridge device with all swp
# ports in the system.
#
# To include this file in the main /etc/network/interfaces file,
# copy this file under /etc/network/interfaces.d/ and use the
# source line in the /etc/network/interfaces file as shown below.
# details.
#
# example entry in /etc/network/interfaces:
#   source /etc/network/interfaces.d/filename
#
# See manpage interfaces(5) for details

";
