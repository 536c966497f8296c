use yew::prelude::*;

/// Stroke icons used across the page, drawn on a 24x24 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowUpRight,
    Boxes,
    CheckCircle,
    ChevronRight,
    Close,
    Cloud,
    GitBranch,
    Globe,
    LineChart,
    Lock,
    Menu,
    Search,
    Server,
    ShieldCheck,
    Sparkles,
    Timer,
}

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            Icon::Boxes => &[
                "M3 14h8v7H3z",
                "M13 14h8v7h-8z",
                "M8 3h8v7H8z",
            ],
            Icon::CheckCircle => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "m9 12 2 2 4-4",
            ],
            Icon::ChevronRight => &["m9 18 6-6-6-6"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Cloud => &["M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"],
            Icon::GitBranch => &[
                "M6 3v12",
                "M15 6a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M3 18a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M18 9a9 9 0 0 1-9 9",
            ],
            Icon::Globe => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Icon::LineChart => &["M3 3v18h18", "m19 9-5 5-4-4-3 3"],
            Icon::Lock => &["M3 11h18v11H3z", "M7 11V7a5 5 0 0 1 10 0v4"],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Search => &[
                "M3 11a8 8 0 1 0 16 0a8 8 0 1 0-16 0",
                "m21 21-4.3-4.3",
            ],
            Icon::Server => &[
                "M2 2h20v8H2z",
                "M2 14h20v8H2z",
                "M6 6h.01",
                "M6 18h.01",
            ],
            Icon::ShieldCheck => &[
                "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10",
                "m9 12 2 2 4-4",
            ],
            Icon::Sparkles => &[
                "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z",
            ],
            Icon::Timer => &[
                "M10 2h4",
                "m12 14 3-3",
                "M4 14a8 8 0 1 0 16 0a8 8 0 1 0-16 0",
            ],
        }
    }

    pub fn view(self, class: &'static str) -> Html {
        html! {
            <svg
                class={classes!("icon", class)}
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                { for self.paths().iter().map(|d| html! { <path d={*d} /> }) }
            </svg>
        }
    }
}
