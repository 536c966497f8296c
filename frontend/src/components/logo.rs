use yew::prelude::*;

const LOGO_SRC: &str = "/xval_logo.png";

const SURFACE: &str = "#0F1118";
const LIME: &str = "#B6FF4A";
const BLUE: &str = "#2B6CFF";
const MAGENTA: &str = "#FF4FD8";

/// The four tiles of the drawn mark, as quad outlines scaled to `mark` px.
fn tile_paths(mark: f64) -> [(String, &'static str); 4] {
    let quad = |pts: [(f64, f64); 4]| {
        let [a, b, c, d] = pts.map(|(x, y)| format!("{:.1} {:.1}", x * mark, y * mark));
        format!("M {a} L {b} L {c} L {d} Z")
    };
    [
        (
            quad([(0.0, 0.23), (0.24, 0.45), (0.12, 0.58), (-0.12, 0.36)]),
            "url(#xval_g_lime)",
        ),
        (
            quad([(0.3, -0.05), (0.52, 0.12), (0.4, 0.26), (0.18, 0.09)]),
            "url(#xval_g_blue)",
        ),
        (
            quad([(0.02, 0.74), (0.24, 0.57), (0.4, 0.74), (0.18, 0.91)]),
            "url(#xval_g_blue)",
        ),
        (
            quad([(0.42, 0.48), (0.66, 0.3), (0.78, 0.44), (0.54, 0.62)]),
            "url(#xval_g_lime)",
        ),
    ]
}

#[derive(Properties, PartialEq)]
pub struct BrandMarkProps {
    #[prop_or(44)]
    pub size: u32,
    #[prop_or(true)]
    pub wordmark: bool,
}

/// Logo image, replaced by the drawn mark and wordmark when it fails to load.
#[function_component(BrandMark)]
pub fn brand_mark(props: &BrandMarkProps) -> Html {
    let image_ok = use_state(|| true);
    let size = props.size as f64;
    let mark = (size * 0.95).round();

    if *image_ok {
        let onerror = {
            let image_ok = image_ok.clone();
            Callback::from(move |_: Event| image_ok.set(false))
        };
        return html! {
            <div class="brand-mark" role="img" aria-label="XVAL"
                style={format!("width: {mark}px; height: {mark}px;")}>
                <img src={LOGO_SRC} alt="XVAL" {onerror} />
            </div>
        };
    }

    let pad = (size * 0.18).round();
    let dot_r = (mark * 0.065).round().max(3.0);
    let font_size = (size * 0.96).round();

    html! {
        <div class="brand-fallback">
            <svg width={mark.to_string()} height={mark.to_string()}
                viewBox={format!("0 0 {mark} {mark}")} role="img" aria-label="XVAL">
                <rect x="0" y="0" width={mark.to_string()} height={mark.to_string()}
                    rx={(mark * 0.26).round().to_string()} fill={SURFACE}
                    stroke="rgba(255,255,255,0.10)" />
                <defs>
                    <linearGradient id="xval_g_lime" x1="0" y1="0" x2="1" y2="1">
                        <stop offset="0" stop-color={LIME} stop-opacity="1" />
                        <stop offset="1" stop-color={LIME} stop-opacity="0.78" />
                    </linearGradient>
                    <linearGradient id="xval_g_blue" x1="0" y1="0" x2="1" y2="1">
                        <stop offset="0" stop-color={BLUE} stop-opacity="1" />
                        <stop offset="1" stop-color={BLUE} stop-opacity="0.78" />
                    </linearGradient>
                </defs>
                <g transform={format!("translate({pad},{pad})")}>
                    { for tile_paths(mark).into_iter().map(|(d, fill)| html! {
                        <path {d} {fill} opacity="0.95" />
                    }) }
                </g>
                <circle cx={(mark * 0.8).to_string()} cy={(mark * 0.22).to_string()}
                    r={dot_r.to_string()} fill={MAGENTA} />
            </svg>
            if props.wordmark {
                <div class="brand-wordmark">
                    <div class="brand-word" style={format!("font-size: {font_size}px;")}>
                        <span>{"X"}</span>
                        <span class="brand-brace">{"{"}</span>
                        <span>{"val"}</span>
                        <span class="brand-brace">{"}"}</span>
                    </div>
                    <div class="brand-slogan">{"exceed, simplify, deliver value"}</div>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_scale_with_the_mark() {
        let tiles = tile_paths(100.0);
        assert_eq!(tiles[0].0, "M 0.0 23.0 L 24.0 45.0 L 12.0 58.0 L -12.0 36.0 Z");
        assert_eq!(tiles[0].1, "url(#xval_g_lime)");
        assert!(tiles.iter().all(|(d, _)| d.starts_with('M') && d.ends_with('Z')));
    }
}
