use crate::model::client::Client;
use crate::model::credits::CreditBalance;
use crate::model::message::Message;
use crate::model::template::Template;

/// Headline numbers of the dashboard home page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_clients: usize,
    pub total_messages: usize,
    pub total_templates: usize,
    pub credits: i64,
}

impl DashboardStats {
    pub fn compute(
        clients: &[Client],
        messages: &[Message],
        templates: &[Template],
        balance: Option<&CreditBalance>,
    ) -> Self {
        Self {
            total_clients: clients.len(),
            total_messages: messages.len(),
            total_templates: templates.len(),
            credits: balance.map_or(0, |b| b.credits),
        }
    }
}

/// The `n` most recent messages, newest first.
///
/// Messages without a timestamp sort last; ties keep the API order.
pub fn recent_messages(messages: &[Message], n: usize) -> Vec<&Message> {
    let mut sorted: Vec<&Message> = messages.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::message::MessageStatus;

    fn message(id: i64, created_at: Option<&str>) -> Message {
        Message {
            id,
            phone: "0612345678".into(),
            template_id: Some(1),
            status: MessageStatus::Delivered,
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn recent_messages_are_newest_first() {
        let messages = vec![
            message(1, Some("2026-01-01T08:00:00Z")),
            message(2, None),
            message(3, Some("2026-02-01T08:00:00Z")),
        ];
        let ids: Vec<_> = recent_messages(&messages, 2).iter().map(|m| m.id).collect();
        assert_eq!(ids, [3, 1]);
    }

    #[test]
    fn stats_without_balance_show_zero_credits() {
        let stats = DashboardStats::compute(&[], &[message(1, None)], &[], None);
        assert_eq!(stats.total_messages, 1);
        assert_eq!(stats.credits, 0);
    }
}
