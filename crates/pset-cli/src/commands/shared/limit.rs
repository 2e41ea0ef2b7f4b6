/// Limit precedence: subcommand `--limit`, then global `--limit`, then
/// `general.default_limit`. Zero is raised to one.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, configured: u32) -> u32 {
    local.or(global).unwrap_or(configured).max(1)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn subcommand_limit_wins() {
        assert_eq!(effective_limit(Some(5), Some(10), 20), 5);
    }

    #[test]
    fn global_used_when_local_missing() {
        assert_eq!(effective_limit(None, Some(10), 20), 10);
    }

    #[test]
    fn configured_default_when_none_set() {
        assert_eq!(effective_limit(None, None, 20), 20);
    }

    #[test]
    fn zero_is_raised() {
        assert_eq!(effective_limit(Some(0), None, 20), 1);
        assert_eq!(effective_limit(None, None, 0), 1);
    }
}
