// src/parsers.rs

/// Wrapper type to parse sizes with optional suffixes (e.g. 64K, 1MiB).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeArg(pub usize);

impl std::str::FromStr for SizeArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");
        let lower = s.to_ascii_lowercase();
        let (num_str, multiplier) = parse_with_suffix(&lower);
        let num: usize = num_str
            .parse()
            .map_err(|_| format!("Invalid size number: {num_str}"))?;
        let bytes = num
            .checked_mul(multiplier)
            .ok_or_else(|| format!("Size too large: {s}"))?;
        if bytes == 0 {
            return Err("Size must be greater than zero".to_string());
        }
        Ok(Self(bytes))
    }
}

fn parse_with_suffix(s: &str) -> (&str, usize) {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const SUFFIXES: &[(&[&str], usize)] = &[(&["mib", "mb", "m"], MB), (&["kib", "kb", "k"], KB)];
    for (suffixes, multiplier) in SUFFIXES {
        for suffix in *suffixes {
            if let Some(stripped) = s.strip_suffix(suffix) {
                return (stripped.trim(), *multiplier);
            }
        }
    }
    (s.strip_suffix('b').unwrap_or(s), 1)
}
