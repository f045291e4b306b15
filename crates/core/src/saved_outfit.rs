//! Detects whether an outfit combination has already been saved.

use crate::outfit::{OutfitSlotIds, OutfitSlots};
use crate::types::DbId;

/// Whether `query` matches any of `saved`.
///
/// Required slots must be equal. An optional slot left empty on the query
/// side matches whatever the saved outfit holds there; an optional slot the
/// query fills must match the saved id exactly. The relation is therefore
/// "query is a subset of saved", not equality.
pub fn is_already_saved<Q, S>(query: &Q, saved: &[S]) -> bool
where
    Q: OutfitSlots + ?Sized,
    S: OutfitSlots,
{
    let query = query.slot_ids();
    saved.iter().any(|s| slots_match(&query, &s.slot_ids()))
}

fn slots_match(query: &OutfitSlotIds, saved: &OutfitSlotIds) -> bool {
    let optional = |q: Option<DbId>, s: Option<DbId>| q.is_none() || q == s;

    query.top_id == saved.top_id
        && query.bottom_id == saved.bottom_id
        && query.shoes_id == saved.shoes_id
        && optional(query.accessory_id, saved.accessory_id)
        && optional(query.outerwear_id, saved.outerwear_id)
        && optional(query.hat_id, saved.hat_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(accessory: Option<i64>, outerwear: Option<i64>, hat: Option<i64>) -> OutfitSlotIds {
        OutfitSlotIds {
            top_id: 1,
            bottom_id: 2,
            shoes_id: 3,
            accessory_id: accessory,
            outerwear_id: outerwear,
            hat_id: hat,
        }
    }

    #[test]
    fn identical_outfit_is_saved() {
        let saved = [ids(Some(4), Some(5), Some(6))];
        assert!(is_already_saved(&ids(Some(4), Some(5), Some(6)), &saved));
    }

    #[test]
    fn empty_query_slot_is_wildcard() {
        let saved = [ids(Some(4), None, None)];
        assert!(is_already_saved(&ids(None, None, None), &saved));
    }

    #[test]
    fn filled_query_slot_must_match_exactly() {
        let saved = [ids(Some(4), None, None)];
        assert!(!is_already_saved(&ids(Some(7), None, None), &saved));

        // Saved outfit lacks the accessory the query specifies.
        let saved = [ids(None, None, None)];
        assert!(!is_already_saved(&ids(Some(4), None, None), &saved));
    }

    #[test]
    fn required_slots_must_match() {
        let mut other = ids(None, None, None);
        other.shoes_id = 99;
        assert!(!is_already_saved(&ids(None, None, None), &[other]));
    }

    #[test]
    fn any_saved_entry_can_match() {
        let saved = [ids(Some(8), None, None), ids(Some(4), Some(5), None)];
        assert!(is_already_saved(&ids(Some(4), None, None), &saved));
    }

    #[test]
    fn nothing_saved_matches_nothing() {
        let saved: [OutfitSlotIds; 0] = [];
        assert!(!is_already_saved(&ids(None, None, None), &saved));
    }
}
