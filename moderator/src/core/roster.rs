//! Roster maintenance
//!
//! Deactivating a moderator keeps their past moderations on the boards;
//! removing them is allowed but drops their name from the roster for good.

use std::collections::HashSet;

use shared::{Moderator, SharedError, SharedResult};

/// Add a new active moderator
pub fn add(roster: &mut Vec<Moderator>, name: &str) -> SharedResult<()> {
    let name = validated_name(name)?;
    if roster.iter().any(|m| m.name == name) {
        return Err(SharedError::DuplicateModerator { name });
    }
    roster.push(Moderator::active(name));
    Ok(())
}

/// Mark a moderator as available or unavailable for future draws
pub fn set_active(roster: &mut [Moderator], name: &str, active: bool) -> SharedResult<()> {
    let moderator = roster
        .iter_mut()
        .find(|m| m.name == name.trim())
        .ok_or_else(|| SharedError::UnknownModerator {
            name: name.to_string(),
        })?;
    moderator.active = active;
    Ok(())
}

/// Delete a moderator from the roster
pub fn remove(roster: &mut Vec<Moderator>, name: &str) -> SharedResult<Moderator> {
    let index = roster
        .iter()
        .position(|m| m.name == name.trim())
        .ok_or_else(|| SharedError::UnknownModerator {
            name: name.to_string(),
        })?;
    let removed = roster.remove(index);
    tracing::warn!(
        "🗑️ Removed {} from the roster; past moderations stay in the history but leave the all-time board",
        removed.name
    );
    Ok(removed)
}

/// Validate names and sort the roster by name
pub fn normalize(mut roster: Vec<Moderator>) -> SharedResult<Vec<Moderator>> {
    let mut seen = HashSet::new();
    for moderator in roster.iter_mut() {
        moderator.name = validated_name(&moderator.name)?;
        if !seen.insert(moderator.name.clone()) {
            return Err(SharedError::DuplicateModerator {
                name: moderator.name.clone(),
            });
        }
    }
    roster.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(roster)
}

fn validated_name(name: &str) -> SharedResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SharedError::EmptyName);
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Moderator> {
        vec![Moderator::active("Carol"), Moderator::new("Alice", false)]
    }

    #[test]
    fn test_add_new_member_is_active() {
        let mut roster = roster();
        add(&mut roster, "  Dan ").unwrap();

        assert_eq!(roster.last(), Some(&Moderator::active("Dan")));
    }

    #[test]
    fn test_add_rejects_duplicates_and_blank_names() {
        let mut roster = roster();

        assert_eq!(
            add(&mut roster, "Carol"),
            Err(SharedError::DuplicateModerator { name: "Carol".to_string() })
        );
        assert_eq!(add(&mut roster, "   "), Err(SharedError::EmptyName));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_set_active() {
        let mut roster = roster();

        set_active(&mut roster, "Alice", true).unwrap();
        assert!(roster.iter().all(|m| m.active));

        assert!(matches!(
            set_active(&mut roster, "Zed", false),
            Err(SharedError::UnknownModerator { .. })
        ));
    }

    #[test]
    fn test_remove() {
        let mut roster = roster();

        let removed = remove(&mut roster, "Carol").unwrap();
        assert_eq!(removed.name, "Carol");
        assert_eq!(roster, vec![Moderator::new("Alice", false)]);
        assert!(remove(&mut roster, "Carol").is_err());
    }

    #[test]
    fn test_normalize_sorts_and_validates() {
        let sorted = normalize(roster()).unwrap();
        let names: Vec<_> = sorted.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);

        let duplicated = vec![Moderator::active("Bob"), Moderator::new(" Bob", false)];
        assert!(matches!(
            normalize(duplicated),
            Err(SharedError::DuplicateModerator { .. })
        ));
    }
}
