use opentelemetry::{KeyValue, metrics::UpDownCounter};
use std::sync::LazyLock;

static STATDS: LazyLock<UpDownCounter<i64>> = LazyLock::new(|| {
    logfire::i64_up_down_counter("whatsapp_relay_statds")
        .with_description("WhatsApp relay statistics")
        .with_unit("event")
        .build()
});

fn incr_statds(metric: String, value: String) {
    STATDS.add(1, &[KeyValue::new(metric, value)]);
}

/// Outcome of one webhook notification: "ignored", "rejected", "no_reply", "replied"
pub fn incr_webhook_statds(outcome: &str) {
    incr_statds("webhook".to_string(), outcome.into())
}

/// Result of one outbound send: "sent", "failed"
pub fn incr_reply_statds(status: &str) {
    incr_statds("reply".to_string(), status.into())
}
