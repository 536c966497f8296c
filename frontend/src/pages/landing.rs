use chrono::Datelike;
use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::logo::BrandMark;
use crate::components::nav::LanguageSwitch;
use crate::components::typewriter_text::TypewriterText;
use crate::content::icons::Icon;
use crate::i18n::CopyText;
use crate::pages::contact::ContactSection;
use crate::pages::services::ServicesSection;
use crate::preferences::use_language;
use crate::scroll::{use_smooth_scroll, Section};

const TECH_BADGES: [&str; 10] = [
    "AWS",
    "Azure",
    "Fortinet",
    "SD-WAN",
    "Kubernetes",
    "Terraform",
    "ArgoCD",
    "ISO 27001",
    "Oracle",
    "SQL Server",
];

const SITE_URL: &str = "https://xval.com.br/";
const CONTACT_EMAIL: &str = "contato@xval.com.br";

fn icon_tile(icon: Icon, tone: &'static str) -> Html {
    html! {
        <div class={classes!("icon-tile", tone)}>{ icon.view("tile-icon") }</div>
    }
}

fn value_panel(copy: &CopyText) -> Html {
    let rows = [
        (Icon::Timer, "tone-blue", copy.value_leadtime, "-35%", copy.value_leadtime_note),
        (
            Icon::ShieldCheck,
            "tone-lime",
            copy.value_flowsec,
            copy.value_flowsec_big,
            copy.value_flowsec_note,
        ),
        (
            Icon::CheckCircle,
            "tone-magenta",
            copy.value_reliability,
            copy.value_reliability_big,
            copy.value_reliability_note,
        ),
    ];

    html! {
        <div class="value-panel">
            <div class="value-panel-head">
                <span>{copy.value_title}</span>
                <span class="value-example">{copy.value_example}</span>
            </div>
            { for rows.into_iter().map(|(icon, tone, label, big, note)| html! {
                <div class="value-row">
                    { icon_tile(icon, tone) }
                    <div>
                        <div class="value-label">{label}</div>
                        <div class="value-big">{big}</div>
                        <div class="value-note">{note}</div>
                    </div>
                </div>
            }) }
        </div>
    }
}

fn hero(copy: &CopyText) -> Html {
    html! {
        <section class="page-section hero">
            <div class="hero-main">
                <div class="pill">
                    { Icon::Sparkles.view("pill-icon") }
                    <span>{copy.pill_scope}</span>
                    <span class="pill-accent">{copy.pill_highbar}</span>
                </div>
                <h1 class="hero-title">
                    <TypewriterText text={copy.hero_title} />
                </h1>
                <p class="hero-body">{copy.hero_body}</p>
                <div class="cta-row">
                    <a href={Section::Contact.href()} data-scroll="true" class="btn btn-primary btn-lg">
                        {copy.hero_cta_diag}
                    </a>
                    <a href={Section::Method.href()} data-scroll="true" class="btn btn-outline btn-lg">
                        {copy.hero_cta_method}
                    </a>
                </div>
                <div class="badge-row">
                    { for TECH_BADGES.iter().map(|tech| html! { <span class="tech-badge">{*tech}</span> }) }
                </div>
            </div>
            <div class="hero-side">{ value_panel(copy) }</div>
        </section>
    }
}

fn method(copy: &CopyText) -> Html {
    let steps = [
        (Icon::Search, copy.method_step1_t, copy.method_step1_d),
        (Icon::Boxes, copy.method_step2_t, copy.method_step2_d),
        (Icon::Sparkles, copy.method_step3_t, copy.method_step3_d),
        (Icon::Timer, copy.method_step4_t, copy.method_step4_d),
    ];
    let lines = [
        (Icon::LineChart, "tone-mist", copy.side1_t, copy.side1_d),
        (Icon::Server, "tone-blue", copy.side2_t, copy.side2_d),
        (Icon::ShieldCheck, "tone-magenta", copy.side3_t, copy.side3_d),
        (Icon::GitBranch, "tone-lime", copy.side4_t, copy.side4_d),
        (Icon::LineChart, "tone-neutral", copy.side5_t, copy.side5_d),
    ];

    html! {
        <section id={Section::Method.id()} class="page-section">
            <div class="panel method-panel">
                <div>
                    <h2 class="section-title">{copy.method_title}</h2>
                    <p class="section-body">{copy.method_body}</p>
                    <div class="step-grid">
                        { for steps.into_iter().map(|(icon, title, detail)| html! {
                            <div class="card-dark step">
                                { icon_tile(icon, "tone-lime") }
                                <div>
                                    <div class="card-title">{title}</div>
                                    <div class="card-note">{detail}</div>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="cta-row">
                        <a href={Section::Contact.href()} data-scroll="true" class="btn btn-primary btn-lg">
                            {copy.method_cta_plan}
                            { Icon::ChevronRight.view("btn-icon") }
                        </a>
                        <a href={Section::Cases.href()} data-scroll="true" class="btn btn-outline btn-lg">
                            {copy.method_cta_cases}
                        </a>
                    </div>
                </div>
                <aside class="card-dark business-lines">
                    <div class="card-title">{copy.sidebar_title}</div>
                    <hr />
                    { for lines.into_iter().map(|(icon, tone, title, detail)| html! {
                        <div class="line-item">
                            { icon_tile(icon, tone) }
                            <div>
                                <div class="card-title">{title}</div>
                                <div class="card-note">{detail}</div>
                            </div>
                        </div>
                    }) }
                </aside>
            </div>
        </section>
    }
}

fn cases(copy: &CopyText) -> Html {
    let studies = [
        (copy.case1_t, copy.case1_d, copy.case1_a),
        (copy.case2_t, copy.case2_d, copy.case2_a),
        (copy.case3_t, copy.case3_d, copy.case3_a),
    ];

    html! {
        <section id={Section::Cases.id()} class="page-section">
            <div class="section-head">
                <div class="section-head-main">
                    <h2 class="section-title">{copy.cases_title}</h2>
                    <p class="section-body">{copy.cases_body}</p>
                </div>
                <div class="card-surface">
                    <div class="card-title">{copy.cases_right_t}</div>
                    <div class="card-note">{copy.cases_right_d}</div>
                </div>
            </div>
            <div class="case-grid">
                { for studies.into_iter().map(|(title, detail, outcome)| html! {
                    <article class="card-surface case" key={title}>
                        <h3 class="case-title">{title}</h3>
                        <p class="card-note">{detail}</p>
                        <span class="case-outcome">{outcome}</span>
                    </article>
                }) }
            </div>
        </section>
    }
}

fn about(copy: &CopyText) -> Html {
    html! {
        <section id={Section::About.id()} class="page-section">
            <div class="panel about-panel">
                <div>
                    <h2 class="section-title">{copy.about_title}</h2>
                    <p class="section-body">{copy.about_p1}</p>
                    <p class="section-body">{copy.about_p2}</p>
                </div>
                <div class="card-dark">
                    <BrandMark size={44} />
                    <hr />
                    <div class="line-item">
                        { icon_tile(Icon::Sparkles, "tone-lime") }
                        <div>
                            <div class="card-title">{copy.about_card_1_t}</div>
                            <div class="card-note">{copy.about_card_1_d}</div>
                        </div>
                    </div>
                    <div class="line-item">
                        { icon_tile(Icon::LineChart, "tone-blue") }
                        <div>
                            <div class="card-title">{copy.about_card_2_t}</div>
                            <div class="card-note">{copy.about_card_2_d}</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn footer(copy: &CopyText) -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div>
                    <BrandMark size={32} />
                    <div class="footer-tagline">{copy.footer_tagline}</div>
                </div>
                <div class="footer-links">
                    <a href={SITE_URL} target="_blank" rel="noopener noreferrer">{"xval.com.br"}</a>
                    {" • "}
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                    <div class="footer-rights">{format!("© {} XVAL. {}", year, copy.footer_rights)}</div>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let language = use_language();
    let locale = language.locale;
    let copy = locale.copy();

    use_smooth_scroll();
    use_title(copy.doc_title.to_string());

    html! {
        <div class="landing">
            { hero(copy) }
            <ServicesSection />
            { method(copy) }
            { cases(copy) }
            { about(copy) }
            <ContactSection {locale} />
            { footer(copy) }
            <div class="mobile-lang-bar">
                <LanguageSwitch />
            </div>
            <style>{r#"
.icon {
    width: 1.25rem;
    height: 1.25rem;
    flex-shrink: 0;
}
.landing {
    min-height: 100vh;
    background: #0a0a0f;
    color: #ffffff;
}
.page-section {
    max-width: 72rem;
    margin: 0 auto;
    padding: 0 1rem 3.5rem;
}
.hero {
    display: grid;
    grid-template-columns: 7fr 5fr;
    gap: 2rem;
    align-items: center;
    padding-top: 4rem;
}
.pill {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.25rem 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.05);
    font-size: 0.75rem;
    font-weight: 800;
    color: rgba(255, 255, 255, 0.7);
}
.pill-icon {
    width: 1rem;
    height: 1rem;
    color: #ff4fd8;
}
.pill-accent {
    color: #b6ff4a;
}
.hero-title {
    margin-top: 1.25rem;
    min-height: 2.2em;
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    font-weight: 900;
    letter-spacing: -0.02em;
}
.typewriter-cursor {
    margin-left: 0.1em;
    color: #b6ff4a;
    animation: blink 1s steps(1) infinite;
}
@keyframes blink {
    50% { opacity: 0; }
}
.hero-body,
.section-body {
    max-width: 42rem;
    margin-top: 0.75rem;
    line-height: 1.6;
    color: rgba(255, 255, 255, 0.7);
}
.cta-row {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
    margin-top: 1.5rem;
}
.badge-row {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-top: 1.5rem;
}
.tech-badge {
    padding: 0.25rem 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.05);
    font-size: 0.75rem;
    font-weight: 800;
    color: rgba(255, 255, 255, 0.7);
}
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.25rem;
    padding: 0.5rem 1rem;
    border-radius: 1rem;
    font-weight: 800;
    text-decoration: none;
    cursor: pointer;
    border: 1px solid transparent;
}
.btn:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
.btn-primary {
    background: #b6ff4a;
    color: #000000;
}
.btn-outline {
    border-color: rgba(255, 255, 255, 0.15);
    background: rgba(255, 255, 255, 0.05);
    color: #ffffff;
}
.btn-outline:hover {
    background: rgba(255, 255, 255, 0.1);
}
.btn-lg {
    height: 3rem;
    font-size: 1rem;
}
.btn-block {
    width: 100%;
    height: 3rem;
}
.btn-icon {
    width: 1rem;
    height: 1rem;
}
.section-head {
    display: grid;
    grid-template-columns: 7fr 5fr;
    gap: 1.5rem;
    align-items: end;
}
.section-title {
    font-size: clamp(1.9rem, 3vw, 2.25rem);
    font-weight: 800;
    letter-spacing: -0.01em;
}
.panel {
    display: grid;
    grid-template-columns: 7fr 5fr;
    gap: 2rem;
    padding: 2.5rem 1.5rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1.75rem;
    background: #0f1118;
}
.card-dark,
.card-surface,
.value-panel {
    padding: 1.25rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1.5rem;
}
.card-dark {
    background: #0a0a0f;
}
.card-surface,
.value-panel {
    background: #0f1118;
}
.card-dark hr {
    margin: 1rem 0;
    border: none;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
}
.card-title {
    font-size: 0.9rem;
    font-weight: 800;
}
.card-note {
    margin-top: 0.25rem;
    font-size: 0.9rem;
    font-weight: 600;
    color: rgba(255, 255, 255, 0.6);
}
.value-panel-head {
    display: flex;
    justify-content: space-between;
    margin-bottom: 0.75rem;
    font-size: 0.8rem;
    font-weight: 800;
    color: rgba(255, 255, 255, 0.6);
}
.value-row,
.step,
.line-item {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
}
.value-row {
    margin-top: 0.75rem;
    padding: 1rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1.5rem;
    background: #0a0a0f;
}
.line-item + .line-item {
    margin-top: 0.75rem;
}
.value-label {
    font-size: 0.9rem;
    font-weight: 800;
    color: rgba(255, 255, 255, 0.8);
}
.value-big {
    margin-top: 0.25rem;
    font-size: 1.75rem;
    font-weight: 900;
}
.value-note {
    margin-top: 0.25rem;
    font-size: 0.9rem;
    font-weight: 600;
    color: rgba(255, 255, 255, 0.6);
}
.icon-tile {
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 0.5rem;
    border-radius: 1rem;
}
.tile-icon {
    width: 1.1rem;
    height: 1.1rem;
}
.tone-blue { background: rgba(43, 108, 255, 0.18); color: #2b6cff; }
.tone-lime { background: rgba(182, 255, 74, 0.16); color: #b6ff4a; }
.tone-magenta { background: rgba(255, 79, 216, 0.18); color: #ff4fd8; }
.tone-mist { background: rgba(245, 247, 255, 0.1); color: #f5f7ff; }
.tone-neutral { background: rgba(255, 255, 255, 0.08); color: rgba(255, 255, 255, 0.85); }
.step-grid {
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 0.75rem;
    margin-top: 1.5rem;
}
.case-grid {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 1rem;
    margin-top: 1.75rem;
}
.case-title {
    font-size: 1.1rem;
    font-weight: 800;
}
.case-outcome {
    display: inline-flex;
    margin-top: 1rem;
    padding: 0.25rem 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.05);
    font-size: 0.85rem;
    font-weight: 800;
    color: rgba(255, 255, 255, 0.8);
}
.form-input {
    padding: 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.15);
    border-radius: 1rem;
    background: #0a0a0f;
    color: #ffffff;
    font: inherit;
}
.form-input::placeholder,
.search-box input::placeholder {
    color: rgba(255, 255, 255, 0.35);
}
.site-footer {
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    background: #0a0a0f;
}
.footer-content {
    max-width: 72rem;
    margin: 0 auto;
    padding: 2.5rem 1rem;
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    align-items: center;
    gap: 1.5rem;
}
.footer-tagline,
.footer-rights {
    margin-top: 0.25rem;
    font-size: 0.75rem;
    font-weight: 600;
    color: rgba(255, 255, 255, 0.55);
}
.footer-links {
    font-size: 0.9rem;
    font-weight: 600;
    color: rgba(255, 255, 255, 0.6);
}
.footer-links a {
    color: inherit;
}
.brand-mark img {
    width: 100%;
    height: 100%;
    object-fit: contain;
}
.brand-fallback {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
}
.brand-word {
    font-weight: 900;
    line-height: 1;
}
.brand-brace {
    color: #b6ff4a;
}
.brand-slogan {
    margin-top: 0.25rem;
    font-size: 0.75rem;
    font-weight: 600;
    color: rgba(255, 255, 255, 0.55);
}
.mobile-lang-bar {
    display: none;
    padding: 0 1rem 2.5rem;
}
@media (max-width: 768px) {
    .hero,
    .section-head,
    .panel,
    .step-grid,
    .case-grid {
        grid-template-columns: 1fr;
    }
}
@media (max-width: 640px) {
    .mobile-lang-bar {
        display: flex;
    }
}
"#}</style>
        </div>
    }
}
