use super::card::{application_card, placeholder_card};
use super::node::{el, Element, Node};
use crate::models::{ApplicationForm, ApplicationRecord};

const ROLE_OPTIONS: &[&str] = &[
    "Graphic Designer",
    "Illustrator",
    "UI/UX Designer",
    "Motion Designer",
    "Photographer",
    "Video Editor",
    "Other",
];
const EXPERIENCE_OPTIONS: &[&str] = &["0-1 years", "1-3 years", "3-5 years", "5+ years"];
const AVAILABILITY_OPTIONS: &[&str] = &["Full-time", "Part-time", "Freelance", "Internship"];

fn layout(title: &str, body: Element) -> Node {
    el("html")
        .attr("lang", "en")
        .child(
            el("head")
                .child(el("meta").attr("charset", "utf-8"))
                .child(
                    el("meta")
                        .attr("name", "viewport")
                        .attr("content", "width=device-width, initial-scale=1"),
                )
                .child(el("title").text(title))
                .child(
                    el("link")
                        .attr("rel", "stylesheet")
                        .attr("href", "/assets/app.css"),
                )
                .child(
                    el("script")
                        .attr("src", "/assets/app.js")
                        .flag("defer", true),
                ),
        )
        .child(body)
        .into()
}

/// The intake form. Values come from `form`, which is blank on a fresh load
/// and holds the rejected input when `error` is set.
pub fn intake_page(form: &ApplicationForm, error: Option<&str>) -> Node {
    let fields = el("form")
        .id("appForm")
        .attr("method", "post")
        .attr("action", "/applications")
        .attr("autocomplete", "off")
        .child(text_field("name", "Full name", "text", &form.name, true))
        .child(text_field("email", "Email", "email", &form.email, true))
        .child(text_field("phone", "Phone", "tel", &form.phone, false))
        .child(text_field("location", "Location", "text", &form.location, false))
        .child(select_field("role", "Role", ROLE_OPTIONS, &form.role))
        .child(select_field(
            "experience",
            "Experience",
            EXPERIENCE_OPTIONS,
            &form.experience,
        ))
        .child(text_field(
            "portfolio",
            "Portfolio link",
            "url",
            &form.portfolio,
            false,
        ))
        .child(instagram_field(form))
        .child(
            el("label")
                .attr("for", "why")
                .text("Why do you want to join?"),
        )
        .child(
            el("textarea")
                .id("why")
                .attr("name", "why")
                .attr("rows", "4")
                .flag("required", true)
                .text(form.why.as_str()),
        )
        .child(select_field(
            "availability",
            "Availability",
            AVAILABILITY_OPTIONS,
            &form.availability,
        ))
        .child(text_field(
            "startDate",
            "Earliest start date",
            "date",
            &form.start_date,
            false,
        ))
        .child(
            el("button")
                .class("btn")
                .attr("type", "submit")
                .text("Submit application"),
        );

    let body = el("body").child(
        el("main")
            .class("container")
            .child(el("h1").text("Apply to join"))
            .child(el("a").class("link").attr("href", "/dashboard").text("Dashboard"))
            .child_opt(error.map(|message| {
                el("div")
                    .class("alert")
                    .attr("role", "alert")
                    .text(message)
            }))
            .child(fields),
    );
    layout("Apply", body)
}

/// Instagram input, required exactly when the portfolio is empty. The client
/// script re-evaluates this on every keystroke into the portfolio field.
fn instagram_field(form: &ApplicationForm) -> Element {
    let required = form.instagram_required();
    el("div")
        .id("instWrap")
        .class(if required { "field" } else { "field optional" })
        .child(
            el("label")
                .attr("for", "instagram")
                .text("Instagram handle (required without a portfolio)"),
        )
        .child(
            el("input")
                .id("instagram")
                .attr("name", "instagram")
                .attr("type", "text")
                .attr("value", form.instagram.as_str())
                .flag("required", required),
        )
}

fn text_field(name: &str, label: &str, kind: &str, value: &str, required: bool) -> Node {
    Node::Fragment(vec![
        el("label").attr("for", name).text(label).into(),
        el("input")
            .id(name)
            .attr("name", name.to_string())
            .attr("type", kind.to_string())
            .attr("value", value)
            .flag("required", required)
            .into(),
    ])
}

fn select_field(name: &str, label: &str, options: &[&str], selected: &str) -> Node {
    let choices = std::iter::once(el("option").attr("value", "").text("Select…")).chain(
        options.iter().map(|option| {
            el("option")
                .attr("value", *option)
                .flag("selected", *option == selected)
                .text(*option)
        }),
    );
    Node::Fragment(vec![
        el("label").attr("for", name).text(label).into(),
        el("select")
            .id(name)
            .attr("name", name.to_string())
            .children(choices)
            .into(),
    ])
}

/// The dashboard: toolbar plus either the cards (newest first, already
/// filtered by `query`) or a placeholder.
pub fn dashboard_page(records: &[ApplicationRecord], query: &str) -> Node {
    let list = if records.is_empty() {
        if query.trim().is_empty() {
            placeholder_card(
                "No applications yet",
                "Open the application form and submit one.",
            )
        } else {
            placeholder_card("No matches", "Try a different search.")
        }
    } else {
        Node::Fragment(
            records
                .iter()
                .map(|record| application_card(record, query))
                .collect(),
        )
    };

    let toolbar = el("div")
        .class("toolbar")
        .child(
            el("form")
                .class("inline")
                .attr("method", "get")
                .attr("action", "/dashboard")
                .child(
                    el("input")
                        .id("search")
                        .attr("type", "search")
                        .attr("name", "q")
                        .attr("placeholder", "Search name, email, role or note")
                        .attr("value", query)
                        .attr("data-live-target", "list")
                        .flag("autofocus", !query.is_empty()),
                ),
        )
        .child(
            el("form")
                .class("inline")
                .attr("method", "post")
                .attr("action", "/applications/clear")
                .attr(
                    "data-confirm",
                    "Clear ALL applications from this browser? This cannot be undone.",
                )
                .child(
                    el("button")
                        .id("clearAll")
                        .class("btn danger")
                        .attr("type", "submit")
                        .text("Clear all"),
                ),
        )
        .child(
            el("button")
                .id("printBtn")
                .class("btn ghost")
                .attr("type", "button")
                .text("Print"),
        );

    let body = el("body").child(
        el("main")
            .class("container")
            .child(el("h1").text("Applications"))
            .child(el("a").class("link").attr("href", "/").text("New application"))
            .child(toolbar)
            .child(el("section").id("list").child(list)),
    );
    layout("Applications", body)
}
