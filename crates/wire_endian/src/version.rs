use core::fmt;

/// Crate version, fixed at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
	pub major: u32,
	pub minor: u32,
	pub patch: u32,
	/// Pre-release tag, empty for a release.
	pub pre: &'static str,
}

#[allow(clippy::cast_lossless)]
const fn parse(digits: &str) -> u32 {
	let bytes = digits.as_bytes();
	let mut value = 0u32;
	let mut index = 0;
	while index < bytes.len() {
		value = value * 10 + (bytes[index] - b'0') as u32;
		index += 1;
	}
	value
}

const VERSION: Version = Version {
	major: parse(env!("CARGO_PKG_VERSION_MAJOR")),
	minor: parse(env!("CARGO_PKG_VERSION_MINOR")),
	patch: parse(env!("CARGO_PKG_VERSION_PATCH")),
	pre: env!("CARGO_PKG_VERSION_PRE"),
};

/// Returns the version of this crate.
///
/// ```
/// let version = wire_endian::version();
/// assert_eq!(version.to_string(), env!("CARGO_PKG_VERSION"));
/// ```
pub const fn version() -> Version {
	VERSION
}

impl fmt::Display for Version {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
		if !self.pre.is_empty() {
			write!(f, "-{}", self.pre)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_decimal_components() {
		assert_eq!(parse("0"), 0);
		assert_eq!(parse("17"), 17);
		assert_eq!(parse("2024"), 2024);
	}

	#[test]
	fn ordering_follows_semver_fields() {
		let older = Version {
			major: 0,
			minor: 2,
			patch: 9,
			pre: "",
		};
		let newer = Version {
			major: 0,
			minor: 3,
			patch: 0,
			pre: "",
		};
		assert!(older < newer);
		assert!(version() >= older);
	}

	#[test]
	fn display_appends_pre_release_tag() {
		use std::string::ToString;

		let release = Version {
			major: 1,
			minor: 4,
			patch: 2,
			pre: "",
		};
		let candidate = Version {
			pre: "rc.1",
			..release
		};
		assert_eq!(release.to_string(), "1.4.2");
		assert_eq!(candidate.to_string(), "1.4.2-rc.1");
		assert_eq!(version().pre, env!("CARGO_PKG_VERSION_PRE"));
	}
}
