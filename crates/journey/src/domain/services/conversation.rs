//! Conversation Search - Most recent chat messages matching a query

use crate::domain::entities::Message;

/// How many messages the chat log shows by default
pub const DEFAULT_CONVERSATION_LIMIT: usize = 50;

/// Messages whose text contains `query` (case-insensitive), newest first,
/// truncated to `limit` after filtering. An empty query matches everything.
pub fn search_messages<'a>(messages: &'a [Message], query: &str, limit: usize) -> Vec<&'a Message> {
    let needle = query.trim().to_lowercase();
    let mut matched: Vec<&Message> = messages
        .iter()
        .filter(|m| m.text_contains(&needle))
        .collect();
    matched.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
    matched.truncate(limit);
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Timestamp;

    fn messages(n: i64) -> Vec<Message> {
        (1..=n)
            .map(|i| {
                let text = if i % 2 == 0 { "Sleep score dipped" } else { "Travel next week" };
                let ts = Timestamp::parse(&format!("2025-01-01T00:{:02}", i % 60)).unwrap();
                Message::new(i, "Ruby", ts, text)
            })
            .collect()
    }

    #[test]
    fn test_newest_first() {
        let msgs = messages(5);
        let ids: Vec<i64> = search_messages(&msgs, "", 10).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_truncates_after_filtering() {
        let msgs = messages(59);
        let hits = search_messages(&msgs, "SLEEP", DEFAULT_CONVERSATION_LIMIT);
        assert_eq!(hits.len(), 29);
        assert!(hits.iter().all(|m| m.text.contains("Sleep")));

        let all = search_messages(&msgs, "", DEFAULT_CONVERSATION_LIMIT);
        assert_eq!(all.len(), 50);
        assert_eq!(all[0].id, 59);
        assert_eq!(all[49].id, 10);
    }

    #[test]
    fn test_empty_query_equals_unfiltered_recent_view() {
        let msgs = messages(55);
        let blank: Vec<i64> = search_messages(&msgs, "   ", 50).iter().map(|m| m.id).collect();
        let mut recent: Vec<&Message> = msgs.iter().collect();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        let recent: Vec<i64> = recent.iter().take(50).map(|m| m.id).collect();
        assert_eq!(blank, recent);
    }

    #[test]
    fn test_no_match_is_empty() {
        let msgs = messages(3);
        assert!(search_messages(&msgs, "statin", 50).is_empty());
    }
}
