// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are forwarded as [`Message::RawEvent`] so the update loop
//! can track the pointer, the window and keyboard shortcuts in one place.

use super::Message;
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

/// Routes native events to the update loop.
///
/// Pointer and window events are always forwarded since the chrome poll
/// needs the pointer position even over buttons. Keyboard events are only
/// forwarded when no widget captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        let forward = match &event {
            event::Event::Mouse(
                mouse::Event::CursorMoved { .. }
                | mouse::Event::CursorEntered
                | mouse::Event::CursorLeft
                | mouse::Event::ButtonReleased(mouse::Button::Left),
            ) => true,
            event::Event::Window(
                window::Event::Opened { .. }
                | window::Event::Resized(_)
                | window::Event::FileDropped(_),
            ) => true,
            event::Event::Keyboard(keyboard::Event::KeyPressed { .. }) => {
                matches!(status, event::Status::Ignored)
            }
            _ => false,
        };

        forward.then(move || Message::RawEvent {
            window: window_id,
            event,
        })
    })
}

/// Creates the fixed-period chrome poll.
pub fn create_tick_subscription(poll_interval: Duration) -> Subscription<Message> {
    time::every(poll_interval).map(Message::Tick)
}

/// Requests a tick per frame while something is animating.
pub fn create_animation_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Tick)
    } else {
        Subscription::none()
    }
}
