use crate::{AppEvent, EventBus};

use serde_json::json;

/// WHAT: Publishing with no subscribers is not an error
/// WHY: Ticks are fire-and-forget
#[test]
fn given_no_subscribers_when_publishing_then_zero_delivered() {
    // Given: A bus nobody listens to
    let bus = EventBus::default();

    // When: Publishing
    let delivered = bus.publish("time", "now");

    // Then: Dropped silently
    assert_eq!(delivered, 0);
    assert_eq!(bus.subscriber_count(), 0);
}

/// WHAT: Every subscriber receives each event
/// WHY: Events fan out to all current listeners
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_two_subscribers_when_publishing_then_both_receive() {
    // Given: Two subscribers
    let bus = EventBus::default();
    let mut first = bus.subscribe();
    let mut second = bus.subscribe();

    // When: Publishing from a clone of the bus
    let delivered = bus.clone().publish("time", "Mon, 02 Jan 2006 15:04:05 +0000");

    // Then: Both got the same event
    assert_eq!(delivered, 2);
    let expected = AppEvent::new("time", "Mon, 02 Jan 2006 15:04:05 +0000");
    assert_eq!(first.recv().await.unwrap(), expected);
    assert_eq!(second.recv().await.unwrap(), expected);
}

/// WHAT: Zero capacity is clamped instead of panicking
/// WHY: Capacity comes from configuration
#[test]
fn given_zero_capacity_when_creating_bus_then_usable() {
    // Given/When: A zero-capacity bus with a subscriber
    let bus = EventBus::new(0);
    let _rx = bus.subscribe();

    // Then: Publishing works
    assert_eq!(bus.publish("time", "now"), 1);
}

/// WHAT: Events encode as {"name", "data"}
/// WHY: The front-end reads the payload from `event.data`
#[test]
#[allow(clippy::unwrap_used)]
fn given_event_when_encoding_then_name_and_data_fields() {
    // Given: A time event
    let event = AppEvent::new("time", "Mon, 02 Jan 2006 15:04:05 +0000");

    // When: Encoding
    let encoded: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();

    // Then: Shape matches the front-end contract
    assert_eq!(
        encoded,
        json!({"name": "time", "data": "Mon, 02 Jan 2006 15:04:05 +0000"})
    );
}
