//! `ping` (iputils)

use argvkit_command::CommandSpec;
use argvkit_error::Result;
use argvkit_options::Options;
use argvkit_validation::NumberRule;
use serde::{Deserialize, Serialize};

use crate::build_command;

pub const PROGRAM: &str = "ping";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PingOptions {
    pub ipv4: bool,
    pub ipv6: bool,
    pub count: Option<u32>,
    /// Seconds between packets; iputils refuses less than 0.2 without root
    pub interval: Option<f64>,
    pub timeout: Option<u32>,
    pub deadline: Option<u32>,
    pub size: Option<u32>,
    pub ttl: Option<u32>,
    pub interface: Option<String>,
    pub numeric: bool,
    pub quiet: bool,
    pub extra: Vec<String>,
}

impl PingOptions {
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options::new()
            .set_flag("ipv4", self.ipv4)
            .set_flag("ipv6", self.ipv6)
            .set_opt("count", self.count)
            .set_opt("interval", self.interval)
            .set_opt("timeout", self.timeout)
            .set_opt("deadline", self.deadline)
            .set_opt("size", self.size)
            .set_opt("ttl", self.ttl)
            .set_opt("interface", self.interface.as_deref())
            .set_flag("numeric", self.numeric)
            .set_flag("quiet", self.quiet)
            .set_list("extra", &self.extra)
    }
}

/// `ping [-4|-6] [-c N] [-i SECS] [-W SECS] [-w SECS] [-s BYTES] [-t TTL]
/// [-I IFACE] [-n] [-q] [extra] HOST`
pub fn ping(host: &str, options: &Options) -> Result<CommandSpec> {
    build_command(PROGRAM, &[], options, |b| {
        b.mutually_exclusive(&["ipv4", "ipv6"], "ping address family")?
            .flag("ipv4", "-4")?
            .flag("ipv6", "-6")?
            .value_number("count", "-c", NumberRule::integer().min(1.0))?
            .value_number("interval", "-i", NumberRule::any().min(0.2))?
            .value_number("timeout", "-W", NumberRule::any().non_negative())?
            .value_number("deadline", "-w", NumberRule::integer().min(1.0))?
            .value_number("size", "-s", NumberRule::integer().non_negative())?
            .value_number("ttl", "-t", NumberRule::integer().min(1.0))?
            .value_token("interface", "-I")?
            .flag("numeric", "-n")?
            .flag("quiet", "-q")?
            .extra()?
            .positional(host, "host")?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use argvkit_error::ErrorKind;

    #[test]
    fn test_ping_count_and_interval() {
        let opts = PingOptions {
            count: Some(3),
            interval: Some(0.5),
            quiet: true,
            ..Default::default()
        };
        let cmd = ping("example.com", &opts.to_options()).unwrap();
        assert_eq!(cmd.argv(), ["ping", "-c", "3", "-i", "0.5", "-q", "example.com"]);
    }

    #[test]
    fn test_ping_whole_float_renders_as_integer() {
        let opts = Options::new().set("count", 2.0).set("interval", 1.0);
        let cmd = ping("host", &opts).unwrap();
        assert_eq!(cmd.args, ["-c", "2", "-i", "1", "host"]);
    }

    #[test]
    fn test_ping_numeric_rules() {
        for (key, value) in [("count", 0.0), ("count", 1.5), ("interval", 0.1), ("ttl", 0.0)] {
            let opts = Options::new().set(key, value);
            let err = ping("host", &opts).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{key}={value}");
        }
    }

    #[test]
    fn test_ping_count_as_string_rejected() {
        let opts = Options::new().set("count", "3");
        let err = ping("host", &opts).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_ping_host_must_not_look_like_a_flag() {
        let err = ping("-f", &Options::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("host"));
    }

    #[test]
    fn test_ping_address_families_conflict() {
        let opts = PingOptions {
            ipv4: true,
            ipv6: true,
            ..Default::default()
        };
        let err = ping("host", &opts.to_options()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConflictingOptions);
    }
}
