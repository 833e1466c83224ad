use web_sys::js_sys;
use yew::prelude::*;
use yew_hooks::use_interval;

pub const TICK_MS: u32 = 200;
const MAX_STEP: f64 = 10.0;
const CAP: f64 = 90.0;

/// Cosmetic progress: creeps up on its own and parks at 90% until the
/// loading screen is taken down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadingProgress {
    value: f64,
}

impl LoadingProgress {
    /// `jitter` is expected in [0, 1).
    pub fn advance(self, jitter: f64) -> Self {
        if self.parked() {
            return Self { value: CAP };
        }
        let step = jitter.clamp(0.0, 1.0) * MAX_STEP;
        Self {
            value: (self.value + step).min(CAP),
        }
    }

    pub fn parked(self) -> bool {
        self.value >= CAP
    }

    pub fn percent(self) -> u32 {
        self.value.round().min(100.0) as u32
    }
}

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let progress = use_state(LoadingProgress::default);

    {
        let progress = progress.clone();
        let millis = if progress.parked() { 0 } else { TICK_MS };
        use_interval(
            move || progress.set(progress.advance(js_sys::Math::random())),
            millis,
        );
    }

    html! {
        <div class="loading-screen">
            <div class="loading-inner">
                <h1 class="loading-title">{"DC ART"}</h1>
                <span class="loading-subtitle">{"Production"}</span>
                <div class="loading-track">
                    <div class="loading-bar" style={format!("width: {}%", progress.percent())}></div>
                </div>
                <div class="loading-percent">{ format!("{}%", progress.percent()) }</div>
            </div>
            <style>
                {r#"
                .loading-screen {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: var(--primary);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background-image: radial-gradient(circle, transparent 40%, rgba(0, 0, 0, 0.6));
                }
                .loading-inner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    animation: fadeUp 1s ease-out;
                }
                .loading-title {
                    font-family: var(--font-serif);
                    font-size: clamp(3rem, 8vw, 4.5rem);
                    color: #fff;
                    letter-spacing: 0.05em;
                    margin: 0 0 0.5rem;
                }
                .loading-subtitle {
                    color: var(--gold-400);
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    font-size: 0.8rem;
                    margin-bottom: 2rem;
                }
                .loading-track {
                    width: 16rem;
                    height: 2px;
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    overflow: hidden;
                }
                .loading-bar {
                    height: 100%;
                    background: var(--gold-400);
                    transition: width 0.3s ease;
                }
                .loading-percent {
                    margin-top: 1rem;
                    color: rgba(212, 175, 55, 0.6);
                    font-family: monospace;
                    font-size: 0.75rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_passes_ninety() {
        let mut progress = LoadingProgress::default();
        for _ in 0..50 {
            progress = progress.advance(0.99);
            assert!(progress.percent() <= 90);
        }
        assert!(progress.parked());
        assert_eq!(progress.percent(), 90);
    }

    #[test]
    fn each_tick_adds_at_most_ten_points() {
        let first = LoadingProgress::default().advance(0.5);
        assert_eq!(first.percent(), 5);
        let second = first.advance(1.5);
        assert_eq!(second.percent(), 15);
        assert_eq!(second.advance(0.0), second);
    }
}
