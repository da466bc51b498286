//! View rendering for the club-creation form.
//!
//! Three blocks: club details (name, contact, description, purpose,
//! category, optional logo), leadership (leader and sub-leader identifier
//! fields with live resolution status), and the submit row. The submit
//! button tracks `can_submit` on every render.

use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::club::ClubCategory;

use super::messages::Msg;
use super::roster::RosterHealth;
use super::state::{ClubCreateComponent, DraftField};
use super::styles;
use super::submit::can_submit;
use super::validation::{FieldStatus, LeadershipRole};

/// Main view function for the club-creation form.
pub fn view(component: &ClubCreateComponent, ctx: &Context<ClubCreateComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="club-create-root" style="max-width: 640px; margin: 0 auto; padding: 16px;">
            <h2>{"Create a New Club"}</h2>
            { build_roster_banner(component) }
            { build_club_details(component, link) }
            { build_leadership(component, link) }
            { build_submit_row(component, link) }
        </div>
    }
}

/// Warns when identifier validation cannot succeed because the roster
/// fetch failed. Lookups still run and report not-found; this banner is
/// the only place the two causes are told apart.
fn build_roster_banner(component: &ClubCreateComponent) -> Html {
    match component.roster.health() {
        RosterHealth::Loading => html! {
            <p style={styles::STATUS_PENDING}>{"Loading student roster…"}</p>
        },
        RosterHealth::Unavailable => html! {
            <div style={styles::BANNER_UNAVAILABLE}>
                {"Student roster unavailable: leadership identifiers cannot be verified right now."}
            </div>
        },
        RosterHealth::Ready => html! {},
    }
}

fn build_club_details(component: &ClubCreateComponent, link: &Scope<ClubCreateComponent>) -> Html {
    let logo_name = component
        .draft
        .image
        .as_ref()
        .map(|file| file.name())
        .unwrap_or_else(|| "No logo selected".to_string());

    html! {
        <div style={styles::SECTION}>
            <h3>{"Club Details"}</h3>
            { text_input(link, DraftField::ClubName, "Club Name", component.draft.club_name.clone(), "text") }
            { text_input(link, DraftField::ClubEmail, "Club Email", component.draft.club_email.clone(), "email") }
            { text_input(link, DraftField::ClubPassword, "Club Password", component.draft.club_password.clone(), "password") }
            { text_area(link, DraftField::Description, "Description", component.draft.description.clone()) }
            { text_area(link, DraftField::Purpose, "Purpose", component.draft.purpose.clone()) }
            { build_category_select(component, link) }

            <div style={styles::FIELD_ROW}>
                <label>{"Club Logo (optional)"}</label>
                <input
                    type="file"
                    accept="image/*"
                    style="display: none;"
                    ref={component.file_input_ref.clone()}
                    onchange={link.callback(|e: Event| {
                        let input = e.target_unchecked_into::<HtmlInputElement>();
                        let file = input.files().and_then(|files| files.get(0));
                        Msg::ImageSelected(file)
                    })}
                />
                <div>
                    <button type="button" onclick={link.callback(|_| Msg::OpenFileDialog)}>
                        {"Choose logo"}
                    </button>
                    <span style="margin-left: 8px; font-size: 12px; color: #666;">{ logo_name }</span>
                </div>
            </div>
        </div>
    }
}

/// Category selector. A manual pick takes ownership of the field away from
/// the classifier for the rest of the draft.
fn build_category_select(
    component: &ClubCreateComponent,
    link: &Scope<ClubCreateComponent>,
) -> Html {
    let current = component.draft.category;

    html! {
        <div style={styles::FIELD_ROW}>
            <label>{"Category"}</label>
            <select onchange={link.callback(|e: Event| {
                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                Msg::CategoryEdited(value)
            })}>
                <option value="" selected={current.is_none()} disabled={true}>
                    {"(suggested from leadership profiles)"}
                </option>
                {
                    ClubCategory::ALL.iter().map(|category| html! {
                        <option
                            value={category.as_str()}
                            selected={current == Some(*category)}
                        >
                            { category.label() }
                        </option>
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}

fn build_leadership(component: &ClubCreateComponent, link: &Scope<ClubCreateComponent>) -> Html {
    let duplicate = match (
        component.leader.resolved_id(),
        component.subleader.resolved_id(),
    ) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    html! {
        <div style={styles::SECTION}>
            <h3>{"Leadership"}</h3>
            { identifier_input(component, link, LeadershipRole::Leader, "Leader Student ID") }
            { identifier_input(component, link, LeadershipRole::Subleader, "Sub-Leader Student ID") }
            {
                if duplicate {
                    html! {
                        <p style={styles::STATUS_NOT_FOUND}>
                            {"Leader and sub-leader must be different students."}
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn identifier_input(
    component: &ClubCreateComponent,
    link: &Scope<ClubCreateComponent>,
    role: LeadershipRole,
    label: &'static str,
) -> Html {
    let field = component.field_state(role);

    html! {
        <div style={styles::FIELD_ROW}>
            <label>{ label }</label>
            <input
                type="text"
                value={field.raw_input().to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::IdentifierInput(role, value)
                })}
            />
            { field_status_line(field.status(), component, role) }
        </div>
    }
}

fn field_status_line(
    status: FieldStatus,
    component: &ClubCreateComponent,
    role: LeadershipRole,
) -> Html {
    match status {
        FieldStatus::Idle => html! {},
        FieldStatus::Pending => html! {
            <span style={styles::STATUS_PENDING}>{"Checking roster…"}</span>
        },
        FieldStatus::Resolved => {
            let detail = component
                .field_state(role)
                .resolved()
                .map(|record| {
                    format!(
                        "{} ({}, year {})",
                        record.name, record.department, record.year
                    )
                })
                .unwrap_or_default();
            html! { <span style={styles::STATUS_RESOLVED}>{ detail }</span> }
        }
        FieldStatus::NotFound => html! {
            <span style={styles::STATUS_NOT_FOUND}>{"No matching student record."}</span>
        },
    }
}

fn build_submit_row(component: &ClubCreateComponent, link: &Scope<ClubCreateComponent>) -> Html {
    let ready = can_submit(&component.leader, &component.subleader, &component.draft);

    html! {
        <div>
            <button
                disabled={!ready || component.submitting}
                onclick={link.callback(|_| Msg::Submit)}
            >
                { if component.submitting { "Submitting…" } else { "Submit Application" } }
            </button>
        </div>
    }
}

fn text_input(
    link: &Scope<ClubCreateComponent>,
    field: DraftField,
    label: &'static str,
    value: String,
    input_type: &'static str,
) -> Html {
    html! {
        <div style={styles::FIELD_ROW}>
            <label>{ label }</label>
            <input
                type={input_type}
                value={value}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::DraftInput(field, value)
                })}
            />
        </div>
    }
}

fn text_area(
    link: &Scope<ClubCreateComponent>,
    field: DraftField,
    label: &'static str,
    value: String,
) -> Html {
    html! {
        <div style={styles::FIELD_ROW}>
            <label>{ label }</label>
            <textarea
                value={value}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                    Msg::DraftInput(field, value)
                })}
            />
        </div>
    }
}
