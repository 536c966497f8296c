use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::catalog::{self, CategoryFilter};
use crate::content::icons::Icon;
use crate::content::services::{Category, ServiceRecord, SERVICES};
use crate::i18n::{CopyText, Locale};
use crate::preferences::use_language;
use crate::scroll::Section;

fn filter_chip(
    label: &'static str,
    value: CategoryFilter,
    current: CategoryFilter,
    on_pick: &Callback<CategoryFilter>,
) -> Html {
    let on_pick = on_pick.clone();
    html! {
        <button
            type="button"
            class={classes!("filter-chip", (value == current).then_some("active"))}
            onclick={Callback::from(move |_: MouseEvent| on_pick.emit(value))}
        >
            {label}
        </button>
    }
}

fn category_pill(category: Category, locale: Locale) -> Html {
    html! {
        <span class={classes!("area-pill", format!("tone-{}", category.code()))}>
            {category.label(locale)}
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    record: &'static ServiceRecord,
    locale: Locale,
    on_open: Callback<&'static ServiceRecord>,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let record = props.record;
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(record))
    };

    html! {
        <button type="button" class="service-card" {onclick}>
            <div class="service-card-head">
                <div class={classes!("service-icon", format!("tone-{}", record.category.code()))}>
                    { record.icon.view("service-icon-svg") }
                </div>
                <div class="service-card-meta">
                    <div class="service-card-tags">
                        { category_pill(record.category, props.locale) }
                        <span class="service-tags">{record.tags.join(" • ")}</span>
                    </div>
                    <h3 class="service-title">{record.title.get(props.locale)}</h3>
                </div>
            </div>
            <p class="service-description">{record.description.get(props.locale)}</p>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceDetailProps {
    record: &'static ServiceRecord,
    locale: Locale,
    on_close: Callback<()>,
}

/// Detail dialog. Clicks on the backdrop close it, clicks inside do not.
#[function_component(ServiceDetail)]
fn service_detail(props: &ServiceDetailProps) -> Html {
    let copy: &CopyText = props.locale.copy();
    let record = props.record;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-panel" role="dialog" aria-modal="true" onclick={keep_open}>
                <div class="modal-head">
                    <div>
                        { category_pill(record.category, props.locale) }
                        <h3 class="modal-title">{record.title.get(props.locale)}</h3>
                        <div class="modal-subtitle">{copy.modal_subtitle}</div>
                    </div>
                    <button type="button" class="modal-close" aria-label={copy.modal_close}
                        onclick={close.clone()}>
                        { Icon::Close.view("modal-close-icon") }
                    </button>
                </div>
                <p class="modal-description">{record.description.get(props.locale)}</p>
                <div class="modal-tags">
                    { for record.tags.iter().map(|tag| html! { <span class="tech-badge">{*tag}</span> }) }
                </div>
                <div class="modal-evidence">
                    { Icon::CheckCircle.view("evidence-icon") }
                    {copy.badge_evidence}
                </div>
                <p class="modal-hint">{copy.modal_hint}</p>
                <div class="modal-actions">
                    <a href={Section::Contact.href()} data-scroll="true" class="btn btn-primary"
                        onclick={close.clone()}>
                        {copy.modal_cta}
                        { Icon::ArrowUpRight.view("btn-icon") }
                    </a>
                    <button type="button" class="btn btn-outline" onclick={close}>
                        {copy.modal_more}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let language = use_language();
    let locale = language.locale;
    let copy = locale.copy();
    let category = use_state(CategoryFilter::default);
    let query = use_state(String::new);
    let selected = use_state(|| None::<&'static ServiceRecord>);

    let visible = use_memo(
        |(category, query, locale)| catalog::filter(SERVICES, *category, query, *locale),
        (*category, (*query).clone(), locale),
    );

    let on_pick = {
        let category = category.clone();
        Callback::from(move |value: CategoryFilter| category.set(value))
    };
    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };
    let on_open = {
        let selected = selected.clone();
        Callback::from(move |record: &'static ServiceRecord| selected.set(Some(record)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    html! {
        <section id={Section::Services.id()} class="page-section">
            <div class="section-head">
                <div class="section-head-main">
                    <h2 class="section-title">{copy.services_title}</h2>
                    <p class="section-body">{copy.services_body}</p>
                </div>
                <div class="filter-panel">
                    <div class="filter-title">{copy.filter_title}</div>
                    <div class="filter-chips">
                        { filter_chip(copy.filter_all, CategoryFilter::All, *category, &on_pick) }
                        { for Category::ALL.into_iter().map(|c| {
                            filter_chip(c.label(locale), CategoryFilter::Only(c), *category, &on_pick)
                        }) }
                    </div>
                    <div class="search-box">
                        { Icon::Search.view("search-icon") }
                        <input
                            type="search"
                            value={(*query).clone()}
                            placeholder={copy.search_placeholder}
                            oninput={on_search}
                        />
                    </div>
                </div>
            </div>

            if visible.is_empty() {
                <p class="filter-empty">{copy.filter_empty}</p>
            } else {
                <div class="service-grid">
                    { for visible.iter().map(|record| html! {
                        <ServiceCard key={record.key()} record={*record} {locale} on_open={on_open.clone()} />
                    }) }
                </div>
            }

            if let Some(record) = *selected {
                <ServiceDetail {record} {locale} {on_close} />
            }

            <style>{r#"
.filter-panel {
    padding: 1.25rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1.5rem;
    background: #0f1118;
}
.filter-title {
    font-size: 0.9rem;
    font-weight: 800;
    color: #ffffff;
}
.filter-chips {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-top: 0.75rem;
}
.filter-chip {
    padding: 0.25rem 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.05);
    color: rgba(255, 255, 255, 0.7);
    font-size: 0.75rem;
    font-weight: 800;
    cursor: pointer;
}
.filter-chip.active {
    border-color: rgba(182, 255, 74, 0.5);
}
.search-box {
    position: relative;
    margin-top: 1rem;
}
.search-icon {
    position: absolute;
    left: 0.75rem;
    top: 0.85rem;
    width: 1rem;
    height: 1rem;
    color: rgba(255, 255, 255, 0.35);
    pointer-events: none;
}
.search-box input {
    width: 100%;
    height: 2.75rem;
    padding-left: 2.25rem;
}
.service-grid {
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 1rem;
    margin-top: 1.75rem;
}
.service-card {
    text-align: left;
    padding: 1.5rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1.5rem;
    background: #0f1118;
    color: inherit;
    cursor: pointer;
    transition: transform 0.2s ease, border-color 0.2s ease;
}
.service-card:hover {
    transform: translateY(-2px);
    border-color: rgba(255, 255, 255, 0.15);
}
.service-card-head {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
}
.service-icon {
    padding: 0.75rem;
    border-radius: 1rem;
}
.service-card-tags {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 0.5rem;
}
.service-tags {
    font-size: 0.75rem;
    font-weight: 600;
    color: rgba(255, 255, 255, 0.5);
}
.service-title {
    margin: 0.5rem 0 0;
    font-size: 1.1rem;
    font-weight: 800;
}
.service-description,
.modal-description {
    margin-top: 0.75rem;
    font-size: 0.9rem;
    line-height: 1.6;
    color: rgba(255, 255, 255, 0.7);
}
.area-pill {
    padding: 0.25rem 0.75rem;
    border-radius: 999px;
    font-size: 0.75rem;
    font-weight: 800;
}
.tone-strategy { background: rgba(245, 247, 255, 0.1); color: #f5f7ff; }
.tone-security { background: rgba(255, 79, 216, 0.14); color: #ff4fd8; }
.tone-infrastructure { background: rgba(43, 108, 255, 0.14); color: #2b6cff; }
.tone-devops { background: rgba(182, 255, 74, 0.14); color: #b6ff4a; }
.tone-databases { background: rgba(255, 255, 255, 0.08); color: rgba(255, 255, 255, 0.8); }
.filter-empty {
    margin-top: 1.75rem;
    color: rgba(255, 255, 255, 0.6);
}
.modal-backdrop {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    background: rgba(0, 0, 0, 0.7);
}
.modal-panel {
    width: 100%;
    max-width: 40rem;
    padding: 1.75rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1.75rem;
    background: #0f1118;
}
.modal-head {
    display: flex;
    justify-content: space-between;
    gap: 1rem;
}
.modal-title {
    margin: 0.75rem 0 0.25rem;
    font-size: 1.4rem;
    font-weight: 900;
}
.modal-subtitle,
.modal-hint {
    font-size: 0.8rem;
    color: rgba(255, 255, 255, 0.5);
}
.modal-close {
    align-self: flex-start;
    background: none;
    border: none;
    color: rgba(255, 255, 255, 0.7);
    cursor: pointer;
}
.modal-close-icon {
    width: 1.25rem;
    height: 1.25rem;
}
.modal-tags {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-top: 1rem;
}
.modal-evidence {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    margin-top: 1rem;
    font-size: 0.8rem;
    font-weight: 800;
    color: rgba(255, 255, 255, 0.8);
}
.evidence-icon {
    width: 1rem;
    height: 1rem;
    color: #b6ff4a;
}
.modal-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
    margin-top: 1.25rem;
}
@media (max-width: 768px) {
    .service-grid {
        grid-template-columns: 1fr;
    }
}
"#}</style>
        </section>
    }
}
