#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::profile::User;
    use crate::shared::{DomainError, UserId};
    use chrono::Utc;

    fn author() -> User {
        User::new(UserId::new(), "Ritarshi Roy".to_string())
    }

    #[test]
    fn test_create_message() {
        let now = Utc::now();

        let message = ForumMessage::new("Anyone up for a study group?", author(), now).unwrap();

        assert_eq!(message.text(), "Anyone up for a study group?");
        assert_eq!(message.author().name, "Ritarshi Roy");
        assert_eq!(message.created_at(), now);
    }

    #[test]
    fn test_message_text_is_trimmed() {
        let message = ForumMessage::new("  hello  ", author(), Utc::now()).unwrap();

        assert_eq!(message.text(), "hello");
    }

    #[test]
    fn test_empty_message_fails() {
        let result = ForumMessage::new("   ", author(), Utc::now());

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_messages_get_distinct_ids() {
        let a = ForumMessage::new("first", author(), Utc::now()).unwrap();
        let b = ForumMessage::new("second", author(), Utc::now()).unwrap();

        assert_ne!(a.id(), b.id());
    }
}
