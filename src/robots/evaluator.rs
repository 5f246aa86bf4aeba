use crate::robots::evaluate_error::EvaluateError;
use crate::robots::group::PathRule;
use crate::robots::parse_result::ParseResult;
use crate::robots::pattern;
use crate::robots::verdict::Verdict;

/// Selects the group whose rules apply to `user_agent`: an exact
/// case-insensitive agent match wins over the `*` group, and when several
/// groups declare the same token the first one in source order wins. An empty
/// token is treated as the wildcard.
pub fn selected_group(result: &ParseResult, user_agent: &str) -> Option<usize> {
    let token = user_agent.trim();
    let token = if token.is_empty() { "*" } else { token };

    result
        .groups
        .iter()
        .position(|g| g.applies_to(token))
        .or_else(|| result.groups.iter().position(|g| g.is_wildcard()))
}

/// Evaluates whether `user_agent` may fetch `path` under the parsed rules.
/// Longest literal match wins; on a tie Allow beats Disallow; no matching
/// rule (or no matching group) means allow.
pub fn evaluate(
    result: &ParseResult,
    user_agent: &str,
    path: &str,
) -> Result<Verdict, EvaluateError> {
    if !path.starts_with('/') {
        return Err(EvaluateError::InvalidPath(path.to_string()));
    }

    let Some(group_id) = selected_group(result, user_agent) else {
        return Ok(Verdict::default_allow());
    };

    let mut best: Option<(&PathRule, usize)> = None;
    for rule in &result.groups[group_id].rules {
        if !pattern::matches(&rule.pattern, path) {
            continue;
        }
        let specificity = pattern::specificity(&rule.pattern);
        let better = match best {
            None => true,
            Some((best_rule, best_specificity)) => {
                specificity > best_specificity
                    || (specificity == best_specificity && rule.allow && !best_rule.allow)
            }
        };
        if better {
            best = Some((rule, specificity));
        }
    }

    Ok(match best {
        Some((rule, _)) => Verdict {
            allowed: rule.allow,
            matched_group: Some(group_id),
            matched_rule: Some(rule.clone()),
        },
        None => Verdict {
            allowed: true,
            matched_group: Some(group_id),
            matched_rule: None,
        },
    })
}

/// The crawl delay declared for the group that applies to `user_agent`.
pub fn crawl_delay_for(result: &ParseResult, user_agent: &str) -> Option<f64> {
    selected_group(result, user_agent).and_then(|id| result.groups[id].crawl_delay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robots::parse;

    #[test]
    fn longer_literal_prefix_wins() {
        let result = parse("User-agent: *\nDisallow: /admin\nAllow: /admin/public\n");
        let verdict = evaluate(&result, "anything", "/admin/public/page").unwrap();
        assert!(verdict.allowed);
        assert_eq!(verdict.matched_rule.unwrap().pattern, "/admin/public");

        let verdict = evaluate(&result, "anything", "/admin/secret").unwrap();
        assert!(!verdict.allowed);
    }

    #[test]
    fn disallow_root_blocks_everything() {
        let result = parse("User-agent: *\nDisallow: /\n");
        assert!(!evaluate(&result, "anybot", "/").unwrap().allowed);
        assert!(!evaluate(&result, "anybot", "/deep/path").unwrap().allowed);
    }

    #[test]
    fn empty_disallow_blocks_nothing() {
        let result = parse("User-agent: *\nDisallow:\n");
        let verdict = evaluate(&result, "anybot", "/anything").unwrap();
        assert!(verdict.allowed);
        assert_eq!(verdict.matched_rule, None);
    }

    #[test]
    fn exact_group_beats_wildcard_group() {
        let result = parse("User-agent: Googlebot\nAllow: /\nUser-agent: *\nDisallow: /\n");
        assert!(evaluate(&result, "Googlebot", "/page").unwrap().allowed);
        assert!(!evaluate(&result, "Bingbot", "/page").unwrap().allowed);
    }

    #[test]
    fn agent_matching_is_case_insensitive() {
        let result = parse("User-agent: Googlebot\nDisallow: /\n");
        assert!(!evaluate(&result, "googlebot", "/x").unwrap().allowed);
    }

    #[test]
    fn first_group_wins_for_duplicate_agent_tokens() {
        let result = parse(
            "User-agent: Googlebot\nDisallow: /first\nUser-agent: Googlebot\nDisallow: /second\n",
        );
        let verdict = evaluate(&result, "Googlebot", "/second/page").unwrap();
        assert!(verdict.allowed);
        assert_eq!(verdict.matched_group, Some(0));
    }

    #[test]
    fn no_matching_group_defaults_to_allow() {
        let result = parse("User-agent: Googlebot\nDisallow: /\n");
        let verdict = evaluate(&result, "Bingbot", "/page").unwrap();
        assert!(verdict.allowed);
        assert_eq!(verdict.matched_group, None);
        assert_eq!(verdict.matched_rule, None);
    }

    #[test]
    fn empty_agent_token_is_treated_as_wildcard() {
        let result = parse("User-agent: *\nDisallow: /\n");
        assert!(!evaluate(&result, "", "/page").unwrap().allowed);
    }

    #[test]
    fn allow_wins_on_equal_specificity() {
        let result = parse("User-agent: *\nDisallow: /dir/\nAllow: /dir/*\n");
        let verdict = evaluate(&result, "anybot", "/dir/page").unwrap();
        assert!(verdict.allowed);
    }

    #[test]
    fn wildcard_and_anchor_patterns() {
        let result = parse("User-agent: *\nDisallow: /*.php$\n");
        assert!(!evaluate(&result, "anybot", "/index.php").unwrap().allowed);
        assert!(evaluate(&result, "anybot", "/index.php.bak").unwrap().allowed);
        assert!(evaluate(&result, "anybot", "/index.html").unwrap().allowed);
    }

    #[test]
    fn invalid_path_is_rejected() {
        let result = parse("User-agent: *\nDisallow: /\n");
        assert_eq!(
            evaluate(&result, "anybot", "no-leading-slash"),
            Err(EvaluateError::InvalidPath("no-leading-slash".to_string()))
        );
    }

    #[test]
    fn crawl_delay_follows_group_selection() {
        let result =
            parse("User-agent: Googlebot\nCrawl-delay: 1\nUser-agent: *\nCrawl-delay: 10\n");
        assert_eq!(crawl_delay_for(&result, "Googlebot"), Some(1.0));
        assert_eq!(crawl_delay_for(&result, "SomethingElse"), Some(10.0));
        assert_eq!(crawl_delay_for(&parse(""), "Googlebot"), None);
    }
}
