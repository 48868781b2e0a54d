//! Failure routing for lookups that resolved to nothing.
//!
//! A failed lookup normally bounces the client back to the page it came from
//! (an empty search box, a mistyped alias). If that page *is* the failing
//! page, or the client sent no referrer, bouncing would loop forever, so the
//! request ends with a not-found instead.

/// What to do with a request whose lookup found nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureOutcome {
  /// Send the client back to this URL. Nothing is re-resolved.
  RedirectToReferrer(String),
  /// Terminal: answer with a client error.
  NotFound {
    code:        u16,
    reason:      &'static str,
    description: &'static str,
  },
}

pub const NOT_FOUND_REASON: &str = "Not Found";
pub const NOT_FOUND_DESCRIPTION: &str =
  "No university matches this address. Check the spelling or pick one from the index.";

/// Decide how to answer a failed lookup.
///
/// `current_url` is the effective URL of the failing request; `referrer` is
/// the declared referring URL, if any. A missing referrer is treated exactly
/// like a referrer equal to `current_url`.
pub fn guard_failure(current_url: &str, referrer: Option<&str>) -> FailureOutcome {
  match referrer {
    Some(r) if r != current_url => FailureOutcome::RedirectToReferrer(r.to_owned()),
    _ => FailureOutcome::NotFound {
      code:        404,
      reason:      NOT_FOUND_REASON,
      description: NOT_FOUND_DESCRIPTION,
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const HERE: &str = "http://localhost:8080/unknown";

  fn is_not_found(o: &FailureOutcome) -> bool {
    matches!(o, FailureOutcome::NotFound { code: 404, .. })
  }

  #[test]
  fn no_referrer_is_terminal() {
    assert!(is_not_found(&guard_failure(HERE, None)));
  }

  #[test]
  fn self_referrer_is_terminal() {
    assert!(is_not_found(&guard_failure(HERE, Some(HERE))));
  }

  #[test]
  fn other_referrer_bounces_back() {
    let back = "http://localhost:8080/";
    assert_eq!(
      guard_failure(HERE, Some(back)),
      FailureOutcome::RedirectToReferrer(back.into()),
    );
  }

  #[test]
  fn comparison_is_exact() {
    // A trailing slash or query makes it a different page.
    let near = "http://localhost:8080/unknown?q=1";
    assert_eq!(
      guard_failure(HERE, Some(near)),
      FailureOutcome::RedirectToReferrer(near.into()),
    );
  }
}
