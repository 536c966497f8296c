//! Locales and the bilingual copy table.
//!
//! Every entry of the table names both its `pt` and `en` text, so a key that
//! is missing one of the locales does not compile.

/// Display language for copy text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Pt,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Pt, Locale::En];

    /// Two-character code, as persisted in local storage.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Pt => "pt",
            Locale::En => "en",
        }
    }

    /// Parses a stored code. Anything other than an exact match is rejected.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "pt" => Some(Locale::Pt),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Label shown on the language switch.
    pub fn switch_label(self) -> &'static str {
        match self {
            Locale::Pt => "PT-BR",
            Locale::En => "EN-US",
        }
    }

    /// Value for the `lang` attribute of the document.
    pub fn html_lang(self) -> &'static str {
        match self {
            Locale::Pt => "pt-BR",
            Locale::En => "en-US",
        }
    }

    pub fn copy(self) -> &'static CopyText {
        match self {
            Locale::Pt => &PT,
            Locale::En => &EN,
        }
    }
}

/// A pair of texts, one per locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localized {
    pub pt: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub const fn new(pt: &'static str, en: &'static str) -> Self {
        Self { pt, en }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Pt => self.pt,
            Locale::En => self.en,
        }
    }
}

macro_rules! copy_table {
    ($($key:ident { pt: $pt:expr, en: $en:expr $(,)? })*) => {
        /// All display strings for one locale, one field per copy key.
        #[derive(Debug, PartialEq, Eq)]
        pub struct CopyText {
            $(pub $key: &'static str,)*
        }

        pub const PT: CopyText = CopyText { $($key: $pt,)* };
        pub const EN: CopyText = CopyText { $($key: $en,)* };

        /// Copy keys in table order.
        #[cfg(test)]
        pub const COPY_KEYS: &[&str] = &[$(stringify!($key),)*];

        #[cfg(test)]
        impl CopyText {
            /// String-keyed lookup for callers that only hold a key name.
            pub fn get(&self, key: &str) -> Option<&'static str> {
                match key {
                    $(stringify!($key) => Some(self.$key),)*
                    _ => None,
                }
            }
        }
    };
}

copy_table! {
    nav_services { pt: "Serviços", en: "Services" }
    nav_method { pt: "Método", en: "Method" }
    nav_cases { pt: "Cases", en: "Case studies" }
    nav_about { pt: "Sobre", en: "About" }
    nav_contact { pt: "Contato", en: "Contact" }
    nav_menu { pt: "Abrir menu", en: "Open menu" }
    cta_talk { pt: "Falar com a XVAL", en: "Talk to XVAL" }
    cta_view_services { pt: "Ver serviços", en: "View services" }
    pill_scope {
        pt: "Estratégia, segurança, infraestrutura, DevOps e dados",
        en: "Strategy, security, infrastructure, DevOps, and data",
    }
    pill_highbar { pt: "com régua alta", en: "with a high bar" }
    hero_title {
        pt: "Valor em produção, com padrão e evidência.",
        en: "Value in production, with standards and evidence.",
    }
    hero_body {
        pt: "A XVAL entra onde o caos vira atraso, incidente e auditoria dolorosa. A gente padroniza o caminho, automatiza evidência e deixa o time entregar mais rápido, com menos risco.",
        en: "XVAL steps in when chaos becomes delay, incidents, and painful audits. We standardize the path, automate evidence, and help your team ship faster with less risk.",
    }
    hero_cta_diag { pt: "Quero um diagnóstico", en: "Request an assessment" }
    hero_cta_method { pt: "Ver método", en: "See the method" }
    value_title { pt: "Painel de valor", en: "SLO" }
    value_example { pt: "exemplo", en: "example" }
    value_leadtime { pt: "Lead time", en: "Lead time" }
    value_leadtime_note {
        pt: "redução com pipeline padrão",
        en: "reduction with a standard pipeline",
    }
    value_flowsec { pt: "Segurança no fluxo", en: "Security in the flow" }
    value_flowsec_big { pt: "evidência pronta", en: "evidence ready" }
    value_flowsec_note { pt: "automatizada para auditoria", en: "automated for audits" }
    value_reliability { pt: "Confiabilidade", en: "Reliability" }
    value_reliability_big { pt: "menos incidentes", en: "fewer incidents" }
    value_reliability_note {
        pt: "SLOs, runbooks e observabilidade",
        en: "SLOs, runbooks, and observability",
    }
    services_title { pt: "Serviços, do jeito que resolve.", en: "Services that actually solve" }
    services_body {
        pt: "Clique em um card para abrir detalhes. Filtre por área e busque por tema.",
        en: "Click a card to open details. Filter by area and search by topic.",
    }
    filter_title { pt: "Filtro", en: "Filter" }
    filter_all { pt: "Todas", en: "All" }
    filter_empty {
        pt: "Nenhum serviço encontrado para esse filtro.",
        en: "No services match this filter.",
    }
    search_placeholder {
        pt: "Buscar por SD-WAN, ISO, IaC, Fortinet, Oracle...",
        en: "Search for SD-WAN, ISO, IaC, Fortinet, Oracle...",
    }
    badge_evidence { pt: "Entregável com evidência", en: "Evidence-ready deliverable" }
    method_title { pt: "Método simples, execução pesada", en: "Simple method, heavy execution" }
    method_body {
        pt: "Sem framework pelo framework. A gente chega, mede, decide e implementa. Tudo com trilha de evidência para você defender em auditoria e no board.",
        en: "No framework theater. We arrive, measure, decide, and implement. Everything with an evidence trail you can defend in audits and in the boardroom.",
    }
    method_step1_t { pt: "Diagnóstico objetivo", en: "Objective assessment" }
    method_step1_d {
        pt: "mapa de risco, gargalos e roadmap curto",
        en: "risk map, bottlenecks, and a short roadmap",
    }
    method_step2_t { pt: "Padrões e guardrails", en: "Standards and guardrails" }
    method_step2_d {
        pt: "landing zone, políticas e pipeline padrão",
        en: "landing zone, policies, and a standard pipeline",
    }
    method_step3_t { pt: "Automação no fluxo", en: "Automation in the flow" }
    method_step3_d { pt: "checks e evidências automáticas", en: "checks and automated evidence" }
    method_step4_t { pt: "Confiabilidade", en: "Reliability" }
    method_step4_d {
        pt: "SLOs, runbooks e observabilidade",
        en: "SLOs, runbooks, and observability",
    }
    method_cta_plan { pt: "Quero um plano", en: "Request a plan" }
    method_cta_cases { pt: "Ver exemplos de cases", en: "See case examples" }
    sidebar_title { pt: "Linhas de Serviços", en: "Business Lines" }
    side1_t { pt: "Estratégia", en: "Strategy" }
    side1_d {
        pt: "PDSI, estratégia de TI e ISO 27001/27701",
        en: "security master plan, IT strategy, ISO 27001/27701",
    }
    side2_t { pt: "Infraestrutura e Redes", en: "Infrastructure and Networks" }
    side2_d {
        pt: "Cloud, SD-WAN, redes, VPNs e service desk",
        en: "cloud, SD-WAN, networks, VPNs, service desk",
    }
    side3_t { pt: "Segurança", en: "Security" }
    side3_d {
        pt: "Fortinet, GRC, cloud security e resposta a incidentes",
        en: "Fortinet, GRC, cloud security, incident response",
    }
    side4_t { pt: "DevOps", en: "DevOps" }
    side4_d { pt: "GitOps, IaC, observabilidade e SRE", en: "GitOps, IaC, observability, SRE" }
    side5_t { pt: "Dados", en: "Data" }
    side5_d {
        pt: "Oracle, SQL Server e consultoria de dados",
        en: "Oracle, SQL Server, data consulting",
    }
    cases_title { pt: "Cases, do tipo que dá para medir.", en: "Case studies you can measure." }
    cases_body {
        pt: "Conteúdos abaixo são exemplos de como escrever case com evidência. Troque pelos seus clientes quando quiser.",
        en: "The content below is sample copy showing how to write evidence-based case studies. Swap in real clients whenever you want.",
    }
    cases_right_t { pt: "O que vira case aqui", en: "What becomes a case study" }
    cases_right_d {
        pt: "tempo de deploy, taxa de falha, MTTR, custo, cobertura de evidência e redução de risco operacional.",
        en: "deploy time, failure rate, MTTR, cost, evidence coverage, and reduced operational risk.",
    }
    case1_t { pt: "GitOps com rollback simples", en: "GitOps with simple rollback" }
    case1_d {
        pt: "Padronização de pipeline, ambientes consistentes e trilha de evidência no deploy.",
        en: "Standard pipeline, consistent environments, and an evidence trail for every deploy.",
    }
    case1_a { pt: "Lead time menor e menos regressões", en: "Lower lead time and fewer regressions" }
    case2_t { pt: "Observabilidade para reduzir MTTR", en: "Observability to reduce MTTR" }
    case2_d {
        pt: "APM, logs e tracing com dashboards mínimos, alertas úteis e runbooks.",
        en: "APM, logs, and tracing with minimal dashboards, useful alerts, and runbooks.",
    }
    case2_a { pt: "Incidentes resolvidos mais rápido", en: "Faster incident resolution" }
    case3_t { pt: "DevSecOps com evidência automática", en: "DevSecOps with automated evidence" }
    case3_d {
        pt: "Policy as code, checks de IaC e relatórios de conformidade sem esforço manual.",
        en: "Policy as code, IaC checks, and compliance reporting without manual work.",
    }
    case3_a { pt: "Auditoria sem pânico", en: "Audits without panic" }
    about_title { pt: "Sobre a XVAL", en: "About XVAL" }
    about_p1 {
        pt: "Consultoria fundada por três sócios com histórico de construir e liderar práticas de estratégia, cloud, segurança, auditoria e DevOps. O foco é execução com padrão, resultado mensurável e autonomia para o cliente.",
        en: "A consultancy founded by three partners with a track record of building and leading practices across strategy, cloud, security, audit, and DevOps. The focus is standards, measurable outcomes, and customer autonomy.",
    }
    about_p2 {
        pt: "A estética e a comunicação aqui são diretas, menos teatro, mais entrega. A marca só promete o que consegue evidenciar.",
        en: "The tone here is direct, less theater, more delivery. We only promise what we can evidence.",
    }
    about_card_1_t { pt: "Entrega acima do esperado", en: "Delivery above expectations" }
    about_card_1_d {
        pt: "o padrão é surpreender, não apenas cumprir",
        en: "the default is to surprise, not merely comply",
    }
    about_card_2_t { pt: "Valor mensurável", en: "Measurable value" }
    about_card_2_d {
        pt: "métricas simples e evidência no fluxo",
        en: "simple metrics and evidence in the flow",
    }
    contact_title { pt: "Vamos destravar sua entrega?", en: "Let’s unblock your delivery?" }
    contact_body {
        pt: "Deixa seus dados aqui que a gente volta com um plano simples, escopo enxuto e uma proposta que amarra problema, plano e sucesso medível.",
        en: "Leave your details and we will come back with a simple plan, a lean scope, and a proposal that connects problem, plan, and measurable success.",
    }
    form_name { pt: "Seu nome", en: "Your name" }
    form_email { pt: "E-mail", en: "Email" }
    form_company { pt: "Empresa", en: "Company" }
    form_need { pt: "O que você quer destravar?", en: "What you want to unblock?" }
    form_send { pt: "Enviar", en: "Send" }
    form_sending { pt: "Enviando...", en: "Sending..." }
    form_sent_ok { pt: "Enviado! ✅", en: "Sent! ✅" }
    form_sent_error {
        pt: "Não foi possível enviar. Tente novamente.",
        en: "Could not send. Please try again.",
    }
    form_config_error {
        pt: "O envio não está configurado neste ambiente.",
        en: "Sending is not configured in this environment.",
    }
    alert_captcha {
        pt: "Confirme o reCAPTCHA antes de enviar.",
        en: "Please complete the reCAPTCHA before sending.",
    }
    alert_required {
        pt: "Preencha nome, e-mail e o campo “O que você quer destravar”.",
        en: "Please fill in name, email, and “What you want to unblock”.",
    }
    captcha_hint {
        pt: "Confirme o reCAPTCHA para habilitar",
        en: "Complete the reCAPTCHA to enable",
    }
    captcha_unavailable {
        pt: "Verificação anti-robô indisponível no momento.",
        en: "Bot verification is unavailable right now.",
    }
    footer_tagline { pt: "Valor em produção, com régua alta", en: "Value in production, high bar" }
    footer_rights { pt: "Todos os direitos reservados.", en: "All rights reserved." }
    modal_subtitle { pt: "Clique fora para fechar", en: "Click outside to close" }
    modal_close { pt: "Fechar", en: "Close" }
    modal_hint {
        pt: "Escopo típico, entregáveis e como isso vira evidência ficam combinados no diagnóstico inicial.",
        en: "Typical scope, deliverables, and how this becomes evidence are agreed during the initial assessment.",
    }
    modal_cta { pt: "Quero isso na minha empresa", en: "I want this for my company" }
    modal_more { pt: "Ver mais serviços", en: "View more services" }
    lang_label { pt: "Idioma", en: "Language" }
    doc_title {
        pt: "XVAL | Valor em produção",
        en: "XVAL | Value in production",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_text_in_both_locales() {
        for key in COPY_KEYS {
            for locale in Locale::ALL {
                let text = locale.copy().get(key);
                assert!(
                    text.is_some_and(|t| !t.trim().is_empty()),
                    "{key} is empty for {locale:?}"
                );
            }
        }
    }

    #[test]
    fn lookup_matches_field_access() {
        assert_eq!(PT.get("nav_services"), Some(PT.nav_services));
        assert_eq!(EN.get("form_send"), Some("Send"));
        assert_eq!(EN.get("no_such_key"), None);
    }

    #[test]
    fn keys_are_unique() {
        let mut keys = COPY_KEYS.to_vec();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), COPY_KEYS.len());
    }

    #[test]
    fn locale_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("PT"), None);
        assert_eq!(Locale::from_code(""), None);
        assert_eq!(Locale::default(), Locale::Pt);
    }
}
