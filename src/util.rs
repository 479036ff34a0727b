//! Small utility helpers used across modules.

/// Log-safe truncation for user-provided text (prompts, filters).
/// Cuts on a char boundary at or below `max` bytes.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut end = max;
  while !s.is_char_boundary(end) {
    end -= 1;
  }
  format!("{}… ({} bytes total)", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn short_strings_pass_through() {
    assert_eq!(trunc_for_log("lotus", 10), "lotus");
  }

  #[test]
  fn cuts_on_char_boundary() {
    // "é" is two bytes, so bytes 2 and 4 fall mid-char.
    assert_eq!(trunc_for_log("aéé", 4), "aé… (5 bytes total)");
    assert_eq!(trunc_for_log("aéé", 2), "a… (5 bytes total)");
  }
}
