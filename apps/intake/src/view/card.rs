use chrono::{DateTime, Local};

use super::node::{el, Element, Node};
use crate::dashboard::actions::CardAction;
use crate::models::{ApplicationRecord, ContactLink};

/// Milliseconds the copy button shows its acknowledgement before reverting.
pub const COPY_ACK_MS: u32 = 1200;

/// One record rendered as a dashboard card.
///
/// `query` is the active search, carried through the delete form so the
/// dashboard comes back filtered the same way.
pub fn application_card(record: &ApplicationRecord, query: &str) -> Node {
    let title = el("div")
        .class("title")
        .text(record.name.as_str())
        .child_opt((!record.role.is_empty()).then(|| {
            el("span")
                .class("small")
                .text(format!(" · {}", record.role))
        }));

    let contact_details: Vec<&str> = [&record.email, &record.phone, &record.location]
        .into_iter()
        .filter(|value| !value.is_empty())
        .map(String::as_str)
        .collect();

    let badges = el("div")
        .class("badges")
        .child(badge(&record.experience))
        .child(badge(&record.availability))
        .child_opt(
            (!record.start_date.is_empty()).then(|| badge(&format!("Start: {}", record.start_date))),
        );

    let actions = el("div")
        .class("actions-row")
        .child_opt(record.contact_link().map(contact_anchor))
        .child(view_form(record))
        .child(copy_button(record))
        .child(delete_form(record, query));

    el("article")
        .class("card")
        .attr("data-id", record.id.as_str())
        .child(
            el("div")
                .class("meta")
                .child(title)
                .child(el("div").class("small").text(contact_details.join(" · ")))
                .child(badges)
                .child(el("div").class("why").text(record.why.as_str()))
                .child(actions)
                .child(
                    el("div")
                        .class("small muted")
                        .text("Submitted: ")
                        .child(submitted_time(&record.timestamp)),
                ),
        )
        .into()
}

/// Card shown in place of the list when there is nothing to display.
pub fn placeholder_card(title: &str, hint: &str) -> Node {
    el("div")
        .class("card placeholder")
        .child(
            el("div")
                .class("meta")
                .child(el("div").class("title").text(title))
                .child(el("div").class("small").text(hint)),
        )
        .into()
}

fn badge(label: &str) -> Element {
    el("span").class("badge").text(label)
}

fn contact_anchor(link: ContactLink) -> Element {
    let (href, label) = match link {
        ContactLink::Portfolio { url } if !is_web_url(&url) => {
            return el("span").class("contact").text(url);
        }
        ContactLink::Portfolio { url } => (url, "Portfolio".to_string()),
        ContactLink::Instagram {
            profile_url,
            handle,
        } => (profile_url, handle),
    };
    el("span").class("contact").child(
        el("a")
            .class("link")
            .attr("href", href)
            .attr("target", "_blank")
            .attr("rel", "noopener")
            .text(label),
    )
}

/// Only http(s) portfolio links become anchors.
fn is_web_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn action_button(record: &ApplicationRecord, action: CardAction, class: &str) -> Element {
    el("button")
        .class(class)
        .attr("type", "submit")
        .attr("data-action", action.as_str())
        .attr("data-id", record.id.as_str())
        .text(action.label())
}

fn view_form(record: &ApplicationRecord) -> Element {
    el("form")
        .class("inline")
        .attr("method", "post")
        .attr("action", CardAction::View.path(&record.id))
        .attr("target", "_blank")
        .child(action_button(record, CardAction::View, "btn"))
}

fn delete_form(record: &ApplicationRecord, query: &str) -> Element {
    el("form")
        .class("inline")
        .attr("method", "post")
        .attr("action", CardAction::Delete.path(&record.id))
        .attr("data-confirm", "Delete this application?")
        .child(
            el("input")
                .attr("type", "hidden")
                .attr("name", "q")
                .attr("value", query),
        )
        .child(action_button(record, CardAction::Delete, "btn danger"))
}

/// The copy action runs in the browser so the summary can reach the
/// clipboard; the button fetches it from the action endpoint.
fn copy_button(record: &ApplicationRecord) -> Element {
    el("button")
        .class("btn ghost")
        .attr("type", "button")
        .attr("data-action", CardAction::Copy.as_str())
        .attr("data-id", record.id.as_str())
        .attr("data-url", CardAction::Copy.path(&record.id))
        .attr("data-ack-ms", COPY_ACK_MS.to_string())
        .text(CardAction::Copy.label())
}

/// `<time>` carrying the stored value in `datetime` so the client script can
/// show it in the viewer's zone. The text is the server-side fallback.
fn submitted_time(timestamp: &str) -> Element {
    let parsed = DateTime::parse_from_rfc3339(timestamp).is_ok();
    el("time")
        .attr_opt("datetime", parsed.then(|| timestamp.to_string()))
        .text(format_submitted(timestamp))
}

/// Submission time in the server's local zone; unparseable values are shown
/// as stored.
pub fn format_submitted(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(at) => at
            .with_timezone(&Local)
            .format("%b %-d, %Y, %-I:%M:%S %p")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}
