//! The services catalog, defined at build time.

use crate::content::icons::Icon;
use crate::i18n::{Locale, Localized};

/// Business area a service belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    StrategicConsulting,
    InformationSecurity,
    Infrastructure,
    DevOps,
    Databases,
}

impl Category {
    /// Display order of the filter chips.
    pub const ALL: [Category; 5] = [
        Category::StrategicConsulting,
        Category::InformationSecurity,
        Category::Infrastructure,
        Category::DevOps,
        Category::Databases,
    ];

    /// Stable identifier, used in keys and CSS classes.
    pub fn code(self) -> &'static str {
        match self {
            Category::StrategicConsulting => "strategy",
            Category::InformationSecurity => "security",
            Category::Infrastructure => "infrastructure",
            Category::DevOps => "devops",
            Category::Databases => "databases",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        let label = match self {
            Category::StrategicConsulting => {
                Localized::new("Consultoria Estratégica", "Strategic Consulting")
            }
            Category::InformationSecurity => {
                Localized::new("Segurança da Informação", "Information Security")
            }
            Category::Infrastructure => Localized::new("Infraestrutura", "Infrastructure"),
            Category::DevOps => Localized::new("DevOps", "DevOps"),
            Category::Databases => Localized::new("Banco de Dados", "Databases"),
        };
        label.get(locale)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ServiceRecord {
    pub category: Category,
    pub title: Localized,
    pub tags: &'static [&'static str],
    pub icon: Icon,
    pub description: Localized,
}

impl ServiceRecord {
    /// List key: category plus the locale-invariant (pt) title.
    pub fn key(&self) -> String {
        format!("{}-{}", self.category.code(), self.title.pt)
    }
}

pub static SERVICES: &[ServiceRecord] = &[
    ServiceRecord {
        category: Category::StrategicConsulting,
        title: Localized::new(
            "Plano Diretor de Segurança da Informação",
            "Information Security Master Plan",
        ),
        tags: &["PDSI", "Roadmap"],
        icon: Icon::LineChart,
        description: Localized::new(
            "Elaboração de plano diretor com diagnóstico, priorização e roadmap, alinhando risco, compliance e execução em ciclos claros.",
            "A pragmatic master plan with assessment, prioritization, and roadmap, aligning risk, compliance, and execution into clear cycles.",
        ),
    },
    ServiceRecord {
        category: Category::StrategicConsulting,
        title: Localized::new("Estratégia de TI", "IT Strategy"),
        tags: &["Strategy", "Operating Model"],
        icon: Icon::Boxes,
        description: Localized::new(
            "Definição de direcionadores, arquitetura alvo, governança e plano de evolução de TI, com foco em eficiência e previsibilidade.",
            "Definition of principles, target architecture, governance, and an evolution plan for IT, focused on efficiency and predictability.",
        ),
    },
    ServiceRecord {
        category: Category::StrategicConsulting,
        title: Localized::new(
            "Certificações ISO 27001 e 27701",
            "ISO 27001 and 27701 Certifications",
        ),
        tags: &["ISO27001", "ISO27701"],
        icon: Icon::ShieldCheck,
        description: Localized::new(
            "Consultoria para preparação, adequação e auditoria, com evidências organizadas e apoio na implementação de controles e políticas.",
            "Support for readiness, implementation, and audit, with organized evidence and hands-on help implementing controls and policies.",
        ),
    },
    ServiceRecord {
        category: Category::InformationSecurity,
        title: Localized::new(
            "Sustentação e Implementação Fortinet",
            "Fortinet Implementation and Support",
        ),
        tags: &["FortiGate", "FortiSIEM", "FortiAnalyzer", "FortiEMS"],
        icon: Icon::ShieldCheck,
        description: Localized::new(
            "Implantação e sustentação de tecnologias Fortinet com hardening, alta disponibilidade, melhoria contínua e operação orientada a evidência.",
            "Implementation and operations for Fortinet technologies with hardening, high availability, continuous improvement, and evidence-driven operations.",
        ),
    },
    ServiceRecord {
        category: Category::InformationSecurity,
        title: Localized::new(
            "Auditoria, Conformidade e Governança",
            "Audit, Compliance, and Governance",
        ),
        tags: &["GRC", "Compliance"],
        icon: Icon::Lock,
        description: Localized::new(
            "Estruturação de governança, políticas, controles e trilha de evidência, com foco em auditoria sem correria e risco controlado.",
            "Governance, policies, controls, and evidence trail, designed for calm audits and controlled risk.",
        ),
    },
    ServiceRecord {
        category: Category::InformationSecurity,
        title: Localized::new(
            "Avaliação de Riscos e Vulnerabilidades",
            "Risk and Vulnerability Assessment",
        ),
        tags: &["Risk", "Vuln"],
        icon: Icon::Search,
        description: Localized::new(
            "Identificação e priorização de riscos e vulnerabilidades com plano de tratamento, quick wins e orientação prática para correção.",
            "Identify and prioritize risks and vulnerabilities with a treatment plan, quick wins, and practical remediation guidance.",
        ),
    },
    ServiceRecord {
        category: Category::InformationSecurity,
        title: Localized::new(
            "Pentest e Spearphishing",
            "Penetration Testing and Spear Phishing",
        ),
        tags: &["Pentest", "Spearphishing"],
        icon: Icon::Search,
        description: Localized::new(
            "Testes ofensivos e simulações para medir exposição real, com relatório acionável, evidências e suporte na remediação.",
            "Offensive testing and simulations to measure real exposure, with actionable reporting, evidence, and remediation support.",
        ),
    },
    ServiceRecord {
        category: Category::InformationSecurity,
        title: Localized::new("Segurança em Nuvem", "Cloud Security"),
        tags: &["CloudSec", "IAM", "CSPM"],
        icon: Icon::Cloud,
        description: Localized::new(
            "Arquitetura e controles de segurança em AWS e Azure, incluindo identidade, segmentação, logging, postura e conformidade.",
            "Security architecture and controls for AWS and Azure, including identity, segmentation, logging, posture management, and compliance.",
        ),
    },
    ServiceRecord {
        category: Category::InformationSecurity,
        title: Localized::new(
            "SOC, SIEM e Resposta a Incidentes",
            "SOC, SIEM, and Incident Response",
        ),
        tags: &["SIEM", "IR", "SOC"],
        icon: Icon::Lock,
        description: Localized::new(
            "Estruturação e melhoria de detecção e resposta, com playbooks, telemetria útil, integração e rotina operacional que fecha o ciclo.",
            "Build and improve detection and response with playbooks, useful telemetry, integrations, and operational routines that close the loop.",
        ),
    },
    ServiceRecord {
        category: Category::InformationSecurity,
        title: Localized::new("Treinamento e Conscientização", "Training and Awareness"),
        tags: &["Awareness", "Culture"],
        icon: Icon::Sparkles,
        description: Localized::new(
            "Programas de conscientização com foco em comportamento, phishing simulado e materiais objetivos para elevar maturidade e reduzir incidentes.",
            "Awareness programs focused on behavior, simulated phishing, and practical materials to raise maturity and reduce incidents.",
        ),
    },
    ServiceRecord {
        category: Category::Infrastructure,
        title: Localized::new(
            "Migração para Nuvem e Modernização",
            "Cloud Migration and Modernization",
        ),
        tags: &["AWS", "Azure", "Migration"],
        icon: Icon::Cloud,
        description: Localized::new(
            "Planejamento e execução de migração com risco controlado, padrões de landing zone e foco em disponibilidade e custo.",
            "Migration planning and execution with controlled risk, landing zone standards, and a focus on availability and cost.",
        ),
    },
    ServiceRecord {
        category: Category::Infrastructure,
        title: Localized::new(
            "Cloud Management e Multi-cloud",
            "Cloud Management and Multi-cloud",
        ),
        tags: &["Ops", "Governance"],
        icon: Icon::Server,
        description: Localized::new(
            "Gestão do ambiente com processos mínimos, automação e governança de custos para reduzir tickets e aumentar previsibilidade.",
            "Operate the environment with lightweight processes, automation, and cost governance to reduce tickets and increase predictability.",
        ),
    },
    ServiceRecord {
        category: Category::Infrastructure,
        title: Localized::new("Implementação de SD-WAN", "SD-WAN Implementation"),
        tags: &["SD-WAN", "WAN"],
        icon: Icon::Server,
        description: Localized::new(
            "Projeto e implantação de SD-WAN com foco em disponibilidade, performance e governança, incluindo desenho, rollout e operação.",
            "Design and deployment of SD-WAN focused on availability, performance, and governance, including rollout and operations.",
        ),
    },
    ServiceRecord {
        category: Category::Infrastructure,
        title: Localized::new(
            "Projeto e Implementação de Redes Corporativas",
            "Corporate Network Design and Implementation",
        ),
        tags: &["LAN", "WAN", "Routing"],
        icon: Icon::Server,
        description: Localized::new(
            "Desenho e implementação de redes corporativas com segmentação, redundância e documentação, do core ao acesso.",
            "Corporate network design and implementation with segmentation, redundancy, and documentation, from core to access.",
        ),
    },
    ServiceRecord {
        category: Category::Infrastructure,
        title: Localized::new("Microssegmentação de Redes", "Network Microsegmentation"),
        tags: &["Segmentation", "Zero Trust"],
        icon: Icon::Lock,
        description: Localized::new(
            "Microssegmentação para reduzir superfície de ataque e conter movimento lateral, com políticas, validação e plano de evolução.",
            "Microsegmentation to reduce attack surface and contain lateral movement, with policies, validation, and an evolution plan.",
        ),
    },
    ServiceRecord {
        category: Category::Infrastructure,
        title: Localized::new(
            "Configuração e Gestão de VPNs",
            "VPN Configuration and Management",
        ),
        tags: &["VPN", "Remote Access"],
        icon: Icon::Lock,
        description: Localized::new(
            "Implantação e gestão de VPNs site-to-site e acesso remoto, com hardening, MFA e rotinas de operação e suporte.",
            "Deploy and manage site-to-site and remote access VPNs with hardening, MFA, and operational support routines.",
        ),
    },
    ServiceRecord {
        category: Category::Infrastructure,
        title: Localized::new("Assessment de Melhores Práticas", "Best Practices Assessment"),
        tags: &["Best Practices", "Assessment"],
        icon: Icon::Search,
        description: Localized::new(
            "Avaliação do ambiente, baseline de melhorias, priorização e plano prático para elevar maturidade e reduzir risco operacional.",
            "Assess the environment, establish an improvement baseline, prioritize, and define a practical plan to raise maturity and reduce operational risk.",
        ),
    },
    ServiceRecord {
        category: Category::Infrastructure,
        title: Localized::new(
            "Suporte e Gestão de TI (Service Desk)",
            "IT Support and Service Desk",
        ),
        tags: &["ITSM", "Service Desk"],
        icon: Icon::Server,
        description: Localized::new(
            "Operação e sustentação de TI com processos, SLAs e melhoria contínua, reduzindo backlog e aumentando previsibilidade.",
            "IT operations with processes, SLAs, and continuous improvement, reducing backlog and increasing predictability.",
        ),
    },
    ServiceRecord {
        category: Category::DevOps,
        title: Localized::new(
            "GitOps e Automação de Deploys",
            "GitOps and Deployment Automation",
        ),
        tags: &["GitOps", "CI/CD"],
        icon: Icon::GitBranch,
        description: Localized::new(
            "Pipelines e entrega contínua com padrões, guardrails e rollback simples, para acelerar com segurança.",
            "Standardized pipelines and continuous delivery with guardrails and simple rollback, accelerating safely.",
        ),
    },
    ServiceRecord {
        category: Category::DevOps,
        title: Localized::new("Infraestrutura como Código (IaC)", "Infrastructure as Code (IaC)"),
        tags: &["Terraform", "IaC"],
        icon: Icon::Boxes,
        description: Localized::new(
            "Automação de infraestrutura com padrões, módulos reutilizáveis, controle de mudança e rastreabilidade, reduzindo drift e retrabalho.",
            "Infrastructure automation with standards, reusable modules, change control, and traceability, reducing drift and rework.",
        ),
    },
    ServiceRecord {
        category: Category::DevOps,
        title: Localized::new("Observabilidade e Monitoramento", "Observability and Monitoring"),
        tags: &["APM", "Logs", "Tracing"],
        icon: Icon::LineChart,
        description: Localized::new(
            "APM, métricas, logs e tracing com foco em diagnóstico rápido, alertas úteis e indicadores que suportam decisões.",
            "APM, metrics, logs, and tracing focused on fast diagnosis, meaningful alerts, and decision-ready indicators.",
        ),
    },
    ServiceRecord {
        category: Category::DevOps,
        title: Localized::new("SRE e Confiabilidade", "SRE and Reliability"),
        tags: &["SRE", "Reliability", "SLO"],
        icon: Icon::Timer,
        description: Localized::new(
            "Práticas de confiabilidade para reduzir incidentes e aumentar previsibilidade, com SLOs, runbooks, postmortems e rituais de operação.",
            "Reliability practices to reduce incidents and increase predictability, with SLOs, runbooks, postmortems, and operational rituals.",
        ),
    },
    ServiceRecord {
        category: Category::DevOps,
        title: Localized::new(
            "DevSecOps e Segurança no Fluxo",
            "DevSecOps and Security in the Flow",
        ),
        tags: &["SAST", "DAST", "Policy"],
        icon: Icon::ShieldCheck,
        description: Localized::new(
            "Integração de segurança no ciclo de entrega com automação, política como código e evidências prontas para auditoria.",
            "Embed security into delivery with automation, policy as code, and audit-ready evidence generated in the flow.",
        ),
    },
    ServiceRecord {
        category: Category::Databases,
        title: Localized::new("Sustentação de Ambientes Oracle", "Oracle Environment Support"),
        tags: &["Oracle", "Performance"],
        icon: Icon::Server,
        description: Localized::new(
            "Sustentação, tuning, disponibilidade e rotinas operacionais para ambientes Oracle, com foco em estabilidade e performance.",
            "Operations, tuning, availability, and routines for Oracle environments, focused on stability and performance.",
        ),
    },
    ServiceRecord {
        category: Category::Databases,
        title: Localized::new(
            "Sustentação de Ambientes SQL Server",
            "SQL Server Environment Support",
        ),
        tags: &["SQL Server", "HA"],
        icon: Icon::Server,
        description: Localized::new(
            "Operação e suporte de SQL Server com práticas de alta disponibilidade, backup, performance e governança de mudanças.",
            "SQL Server operations and support with high availability practices, backups, performance tuning, and change governance.",
        ),
    },
    ServiceRecord {
        category: Category::Databases,
        title: Localized::new("Consultoria de Dados", "Data Consulting"),
        tags: &["Data", "Governance"],
        icon: Icon::LineChart,
        description: Localized::new(
            "Apoio em arquitetura e governança de dados, definição de padrões, qualidade, integração e uso para decisão.",
            "Support for data architecture and governance, including standards, quality, integration, and decision use.",
        ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn record_keys_are_unique() {
        let keys: HashSet<String> = SERVICES.iter().map(ServiceRecord::key).collect();
        assert_eq!(keys.len(), SERVICES.len());
    }

    #[test]
    fn every_category_has_services() {
        for category in Category::ALL {
            assert!(
                SERVICES.iter().any(|s| s.category == category),
                "no services for {category:?}"
            );
        }
    }

    #[test]
    fn records_are_fully_translated() {
        for service in SERVICES {
            for locale in Locale::ALL {
                assert!(!service.title.get(locale).is_empty());
                assert!(!service.description.get(locale).is_empty());
            }
            assert!(!service.tags.is_empty(), "{} has no tags", service.key());
        }
    }

    #[test]
    fn category_labels_follow_locale() {
        assert_eq!(Category::Databases.label(Locale::Pt), "Banco de Dados");
        assert_eq!(Category::Databases.label(Locale::En), "Databases");
    }
}
