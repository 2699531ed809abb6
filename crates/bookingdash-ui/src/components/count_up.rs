//! Count-up number display

use std::time::Duration;

use bookingdash_core::countup::{self, format_thousands, DEFAULT_FRAME_INTERVAL};
use dioxus::prelude::*;
use tokio::time::Instant;

/// Properties for the CountUp component
#[derive(Clone, PartialEq, Props)]
pub struct CountUpProps {
    /// Final value
    pub end: u64,
    /// Animation length in milliseconds (default: 2000)
    #[props(default = 2000)]
    pub duration_ms: u64,
    /// When false the final value is shown immediately
    #[props(default = true)]
    pub animate: bool,
}

/// Counts from zero up to `end`, with thousands separators.
///
/// The displayed value is driven by a timer loop and always settles on
/// exactly `end`.
#[component]
pub fn CountUp(props: CountUpProps) -> Element {
    let end = props.end;
    let animate = props.animate;
    let duration = Duration::from_millis(props.duration_ms);
    let mut shown = use_signal(move || if animate { 0 } else { end });

    use_future(move || async move {
        if !animate {
            return;
        }
        let count = countup::CountUp::new(end).with_duration(duration);
        let started = Instant::now();
        loop {
            let elapsed = started.elapsed();
            shown.set(count.value_at(elapsed));
            if count.is_finished(elapsed) {
                tracing::trace!(end, "Count-up finished");
                break;
            }
            tokio::time::sleep(DEFAULT_FRAME_INTERVAL).await;
        }
    });

    let text = format_thousands(shown());

    rsx! {
        span { class: "count-up", "{text}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_compare_by_value() {
        let a = CountUpProps { end: 28, duration_ms: 2000, animate: true };
        let b = CountUpProps { end: 28, duration_ms: 2000, animate: true };
        assert!(a == b);
        assert!(a != CountUpProps { animate: false, ..b });
    }
}
