//! Integration-status display projection.
//!
//! Turns the three stored connection booleans into the fixed display triples
//! shown on the integrations panel. "Connected" reflects only what was last
//! written to the store; there is no live health check.

use serde::Serialize;

/// The three integration channel kinds, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    ChatNotifications,
    MeetingScheduling,
    AutomationWebhook,
}

/// Stored connection flags for one client's integrations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectionFlags {
    pub slack_connected: bool,
    pub zoho_connected: bool,
    pub n8n_connected: bool,
}

/// A display triple for one channel.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelView {
    pub kind: ChannelKind,
    pub label: &'static str,
    pub status: &'static str,
    pub connected: bool,
}

/// Project the stored flags into the three fixed channel views.
pub fn channel_views(flags: ConnectionFlags) -> [ChannelView; 3] {
    [
        ChannelView {
            kind: ChannelKind::ChatNotifications,
            label: "Slack Notifications",
            status: if flags.slack_connected {
                "Connected"
            } else {
                "Disconnected"
            },
            connected: flags.slack_connected,
        },
        ChannelView {
            kind: ChannelKind::MeetingScheduling,
            label: "Zoho Meetings",
            status: if flags.zoho_connected { "Ready" } else { "Not Ready" },
            connected: flags.zoho_connected,
        },
        ChannelView {
            kind: ChannelKind::AutomationWebhook,
            label: "n8n Automation",
            status: if flags.n8n_connected {
                "Configured"
            } else {
                "Not Configured"
            },
            connected: flags.n8n_connected,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_connected() {
        let views = channel_views(ConnectionFlags {
            slack_connected: true,
            zoho_connected: true,
            n8n_connected: true,
        });
        assert_eq!(views[0].status, "Connected");
        assert_eq!(views[1].status, "Ready");
        assert_eq!(views[2].status, "Configured");
        assert!(views.iter().all(|v| v.connected));
    }

    #[test]
    fn none_connected() {
        let views = channel_views(ConnectionFlags::default());
        assert_eq!(views[0].status, "Disconnected");
        assert_eq!(views[1].status, "Not Ready");
        assert_eq!(views[2].status, "Not Configured");
        assert!(views.iter().all(|v| !v.connected));
    }

    #[test]
    fn channels_are_independent() {
        let views = channel_views(ConnectionFlags {
            slack_connected: false,
            zoho_connected: true,
            n8n_connected: false,
        });
        assert!(!views[0].connected);
        assert!(views[1].connected);
        assert!(!views[2].connected);
    }

    #[test]
    fn labels_are_stable() {
        let views = channel_views(ConnectionFlags::default());
        assert_eq!(views[0].label, "Slack Notifications");
        assert_eq!(views[1].label, "Zoho Meetings");
        assert_eq!(views[2].label, "n8n Automation");
    }
}
