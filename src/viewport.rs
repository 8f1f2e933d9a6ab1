//! Webview bridge for viewport observation and in-page scrolling.
//!
//! [`ScriptViewport`] installs an `IntersectionObserver` in the webview and
//! streams its entries back through a `document::eval` channel. Disposing
//! the subscription cancels the reader task and disconnects the observer.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use folio_core::profile::Section;
use folio_core::viewport::{
    IntersectionCallback, IntersectionEntry, ObserverOptions, Subscription, Viewport,
};

static NEXT_OBSERVER_ID: AtomicU64 = AtomicU64::new(1);

/// Viewport backed by the webview's IntersectionObserver
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptViewport;

impl Viewport for ScriptViewport {
    fn observe(
        &self,
        targets: Vec<String>,
        options: ObserverOptions,
        mut callback: IntersectionCallback,
    ) -> Subscription {
        let id = NEXT_OBSERVER_ID.fetch_add(1, Ordering::Relaxed);
        let script = observer_script(id, &targets, options);
        tracing::debug!(id, targets = targets.len(), "observer registered");

        let task = spawn(async move {
            let mut eval = document::eval(&script);
            loop {
                match eval.recv::<IntersectionEntry>().await {
                    Ok(entry) => callback(entry),
                    Err(e) => {
                        tracing::warn!("Observer {} channel closed: {:?}", id, e);
                        break;
                    }
                }
            }
        });

        Subscription::new(move || {
            task.cancel();
            let _ = document::eval(&disconnect_script(id));
            tracing::debug!(id, "observer released");
        })
    }
}

fn observer_script(id: u64, targets: &[String], options: ObserverOptions) -> String {
    let targets = serde_json::to_string(targets).unwrap_or_else(|_| "[]".to_string());
    let root_margin =
        serde_json::to_string(options.root_margin).unwrap_or_else(|_| "\"0px\"".to_string());

    format!(
        r#"
const observer = new IntersectionObserver((entries) => {{
  for (const entry of entries) {{
    dioxus.send({{
      target: entry.target.id,
      is_intersecting: entry.isIntersecting,
      ratio: entry.intersectionRatio,
    }});
  }}
}}, {{ threshold: {threshold}, rootMargin: {root_margin} }});
window.__folioObservers = window.__folioObservers || {{}};
window.__folioObservers[{id}] = observer;
for (const id of {targets}) {{
  const el = document.getElementById(id);
  if (el) observer.observe(el);
}}
// keep the channel open for the life of the observer
await new Promise(() => {{}});
"#,
        threshold = options.threshold,
    )
}

fn disconnect_script(id: u64) -> String {
    format!(
        r#"
const observers = window.__folioObservers || {{}};
if (observers[{id}]) {{
  observers[{id}].disconnect();
  delete observers[{id}];
}}
"#
    )
}

fn scroll_script(anchor: &str) -> String {
    let anchor = serde_json::to_string(anchor).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "document.getElementById({anchor})?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});"
    )
}

/// Smooth-scroll `section` into view.
pub fn scroll_to(section: Section) {
    tracing::debug!(%section, "scroll to section");
    let _ = document::eval(&scroll_script(section.anchor()));
}
