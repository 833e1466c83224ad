use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlVideoElement};
use yew::prelude::*;

pub const CONTROLS_HIDE_MS: u32 = 2_000;
pub const NO_SOUND_NOTICE_MS: u32 = 2_000;
const UNMUTE_FALLBACK_VOLUME: f64 = 0.5;

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MuteOutcome {
    Muted,
    Unmuted,
    NoSound,
}

/// Everything the custom player shows. The `<video>` element follows this,
/// not the other way round, except for the clock which the element owns.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    pub has_audio: bool,
    pub playing: bool,
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    pub muted: bool,
    pub fullscreen: bool,
    pub controls_visible: bool,
    pub volume_dragging: bool,
    pub no_sound_notice: bool,
    pub load_failed: bool,
}

impl PlayerState {
    pub fn new(has_audio: bool) -> Self {
        Self {
            has_audio,
            playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: if has_audio { 1.0 } else { 0.0 },
            muted: !has_audio,
            fullscreen: false,
            controls_visible: true,
            volume_dragging: false,
            no_sound_notice: false,
            load_failed: false,
        }
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
        if !self.playing {
            self.controls_visible = true;
        }
    }

    pub fn ended(&mut self) {
        self.playing = false;
        self.controls_visible = true;
    }

    pub fn set_duration(&mut self, duration: f64) {
        self.duration = finite_or_zero(duration);
        self.current_time = self.current_time.min(self.duration);
    }

    /// Clamps to [0, duration] and returns the position actually used.
    pub fn seek(&mut self, time: f64) -> f64 {
        let time = if time.is_nan() { 0.0 } else { time };
        self.current_time = time.clamp(0.0, self.duration);
        self.current_time
    }

    pub fn set_volume(&mut self, volume: f64) {
        if !self.has_audio {
            return;
        }
        let volume = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };
        self.volume = volume;
        self.muted = volume == 0.0;
    }

    pub fn toggle_mute(&mut self) -> MuteOutcome {
        if !self.has_audio {
            self.muted = true;
            self.no_sound_notice = true;
            return MuteOutcome::NoSound;
        }
        self.muted = !self.muted;
        if self.muted {
            MuteOutcome::Muted
        } else {
            if self.volume == 0.0 {
                self.volume = UNMUTE_FALLBACK_VOLUME;
            }
            MuteOutcome::Unmuted
        }
    }

    pub fn pointer_moved(&mut self) {
        self.controls_visible = true;
    }

    pub fn idle_elapsed(&mut self) {
        if self.playing && !self.volume_dragging {
            self.controls_visible = false;
        }
    }

    pub fn progress_percent(&self) -> f64 {
        if self.duration > 0.0 {
            self.current_time / self.duration * 100.0
        } else {
            0.0
        }
    }

    pub fn volume_percent(&self) -> f64 {
        self.volume * 100.0
    }
}

pub enum PlayerAction {
    TogglePlay,
    Ended,
    TimeUpdate(f64),
    MetadataLoaded(f64),
    Seek(f64),
    SetVolume(f64),
    ToggleMute,
    DismissNotice,
    SetFullscreen(bool),
    PointerMoved,
    IdleElapsed,
    SetDragging(bool),
    LoadFailed,
}

impl Reducible for PlayerState {
    type Action = PlayerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PlayerAction::TogglePlay => next.toggle_play(),
            PlayerAction::Ended => next.ended(),
            PlayerAction::TimeUpdate(time) => next.current_time = finite_or_zero(time),
            PlayerAction::MetadataLoaded(duration) => next.set_duration(duration),
            PlayerAction::Seek(time) => {
                next.seek(time);
            }
            PlayerAction::SetVolume(volume) => next.set_volume(volume),
            PlayerAction::ToggleMute => {
                next.toggle_mute();
            }
            PlayerAction::DismissNotice => next.no_sound_notice = false,
            PlayerAction::SetFullscreen(on) => next.fullscreen = on,
            PlayerAction::PointerMoved => next.pointer_moved(),
            PlayerAction::IdleElapsed => next.idle_elapsed(),
            PlayerAction::SetDragging(dragging) => next.volume_dragging = dragging,
            PlayerAction::LoadFailed => {
                next.load_failed = true;
                next.playing = false;
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    pub src: String,
    #[prop_or_default]
    pub poster: Option<String>,
    #[prop_or(true)]
    pub has_audio: bool,
}

#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoPlayerProps) -> Html {
    let has_audio = props.has_audio;
    let state = use_reducer(move || PlayerState::new(has_audio));
    let video_ref = use_node_ref();
    let container_ref = use_node_ref();
    let hide_timer = use_mut_ref(|| None::<Timeout>);
    let notice_timer = use_mut_ref(|| None::<Timeout>);

    // keep the element in line with the state
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |(playing, volume, muted)| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_volume(*volume);
                    video.set_muted(*muted);
                    if *playing {
                        if video.paused() {
                            let _ = video.play();
                        }
                    } else if !video.paused() {
                        let _ = video.pause();
                    }
                }
                || ()
            },
            (state.playing, state.volume, state.muted),
        );
    }

    // Esc and browser chrome can leave fullscreen without our button
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let listener_document = document.clone();
                let fullscreen_callback = Closure::wrap(Box::new(move || {
                    let active = listener_document
                        .as_ref()
                        .map(|d| d.fullscreen_element().is_some())
                        .unwrap_or(false);
                    state.dispatch(PlayerAction::SetFullscreen(active));
                }) as Box<dyn FnMut()>);

                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "fullscreenchange",
                        fullscreen_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(document) = &document {
                        let _ = document.remove_event_listener_with_callback(
                            "fullscreenchange",
                            fullscreen_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_play = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            state.dispatch(PlayerAction::TogglePlay);
        })
    };

    let on_keydown = {
        let state = state.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == " " {
                e.prevent_default();
                state.dispatch(PlayerAction::TogglePlay);
            }
        })
    };

    let on_mouse_move = {
        let state = state.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(PlayerAction::PointerMoved);
            let state = state.clone();
            // replacing the handle drops, and so cancels, the previous timer
            *hide_timer.borrow_mut() = Some(Timeout::new(CONTROLS_HIDE_MS, move || {
                state.dispatch(PlayerAction::IdleElapsed);
            }));
        })
    };

    let on_time_update = {
        let state = state.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |_: Event| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                state.dispatch(PlayerAction::TimeUpdate(video.current_time()));
            }
        })
    };

    let on_metadata = {
        let state = state.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |_: Event| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                state.dispatch(PlayerAction::MetadataLoaded(video.duration()));
            }
        })
    };

    let on_ended = {
        let state = state.clone();
        Callback::from(move |_: Event| state.dispatch(PlayerAction::Ended))
    };

    let on_error = {
        let state = state.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            log::error!("Failed to load video {}", src);
            state.dispatch(PlayerAction::LoadFailed);
        })
    };

    let on_seek = {
        let state = state.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let requested = input.value().parse::<f64>().unwrap_or(0.0);
            let mut preview = (*state).clone();
            let time = preview.seek(requested);
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                video.set_current_time(time);
            }
            state.dispatch(PlayerAction::Seek(time));
        })
    };

    let on_volume = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(volume) = input.value().parse::<f64>() {
                state.dispatch(PlayerAction::SetVolume(volume));
            }
        })
    };

    let toggle_mute = {
        let state = state.clone();
        let notice_timer = notice_timer.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            state.dispatch(PlayerAction::ToggleMute);
            if !state.has_audio {
                let state = state.clone();
                *notice_timer.borrow_mut() = Some(Timeout::new(NO_SOUND_NOTICE_MS, move || {
                    state.dispatch(PlayerAction::DismissNotice);
                }));
            }
        })
    };

    let toggle_fullscreen = {
        let state = state.clone();
        let container_ref = container_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if document.fullscreen_element().is_none() {
                if let Some(container) = container_ref.cast::<web_sys::Element>() {
                    if container.request_fullscreen().is_ok() {
                        state.dispatch(PlayerAction::SetFullscreen(true));
                    }
                }
            } else {
                document.exit_fullscreen();
                state.dispatch(PlayerAction::SetFullscreen(false));
            }
        })
    };

    let drag_start = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PlayerAction::SetDragging(true)))
    };
    let drag_end = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PlayerAction::SetDragging(false)))
    };

    let progress = state.progress_percent();
    let volume_pct = state.volume_percent();
    let max_time = if state.duration > 0.0 { state.duration } else { 100.0 };

    html! {
        <div
            class="video-player"
            ref={container_ref}
            tabindex="0"
            onmousemove={on_mouse_move}
            onclick={toggle_play.clone()}
            onkeydown={on_keydown}
        >
            <video
                ref={video_ref}
                src={props.src.clone()}
                poster={props.poster.clone()}
                class="video-element"
                ontimeupdate={on_time_update}
                onloadedmetadata={on_metadata}
                onended={on_ended}
                onerror={on_error}
                playsinline=true
            />
            if state.load_failed {
                <div class="video-error">{"This video could not be loaded"}</div>
            }
            if state.no_sound_notice {
                <div class="no-sound-notice">{"⚠ Video has no sound"}</div>
            }
            if !state.playing && !state.load_failed {
                <div class="play-overlay"><span class="play-badge">{"▶"}</span></div>
            }
            <div
                class={classes!("video-controls", (!state.controls_visible).then(|| "hidden"))}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div class="timeline">
                    <input
                        type="range"
                        min="0"
                        max={max_time.to_string()}
                        step="0.01"
                        value={state.current_time.to_string()}
                        oninput={on_seek}
                    />
                    <div class="timeline-fill" style={format!("width: {:.2}%", progress)}></div>
                </div>
                <div class="control-row">
                    <div class="control-group">
                        <button class="control-button" onclick={toggle_play}>
                            { if state.playing { "❚❚" } else { "▶" } }
                        </button>
                        <button
                            class={classes!("control-button", (!state.has_audio).then(|| "disabled"))}
                            onclick={toggle_mute}
                        >
                            { if state.muted || !state.has_audio { "🔇" } else { "🔊" } }
                        </button>
                        <div class="volume-slider">
                            <input
                                type="range"
                                min="0"
                                max="1"
                                step="0.01"
                                value={state.volume.to_string()}
                                disabled={!state.has_audio}
                                oninput={on_volume}
                                onmousedown={drag_start}
                                onmouseup={drag_end}
                            />
                            <div class="volume-fill" style={format!("width: {:.0}%", volume_pct)}></div>
                            if state.has_audio {
                                <span class="volume-tooltip">{format!("{:.0}%", volume_pct)}</span>
                            }
                        </div>
                    </div>
                    <button class="control-button" onclick={toggle_fullscreen}>
                        { if state.fullscreen { "🗗" } else { "⛶" } }
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .video-player {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    background: #000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    user-select: none;
                    outline: none;
                }
                .video-element {
                    max-height: 80vh;
                    max-width: 100%;
                    object-fit: contain;
                }
                .play-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.3);
                    pointer-events: none;
                }
                .play-badge {
                    width: 80px;
                    height: 80px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(8px);
                    color: #fff;
                    font-size: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .no-sound-notice, .video-error {
                    position: absolute;
                    top: 2.5rem;
                    background: rgba(239, 68, 68, 0.9);
                    color: #fff;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    font-size: 0.85rem;
                    z-index: 50;
                }
                .video-controls {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 3rem 1.5rem 1.5rem;
                    background: linear-gradient(to top, rgba(0,0,0,0.9), rgba(0,0,0,0.6), transparent);
                    transition: opacity 0.3s ease;
                    opacity: 1;
                }
                .video-controls.hidden {
                    opacity: 0;
                }
                .timeline, .volume-slider {
                    position: relative;
                    height: 6px;
                    background: rgba(255, 255, 255, 0.3);
                    border-radius: 999px;
                    margin-bottom: 1rem;
                }
                .volume-slider {
                    width: 6rem;
                    height: 4px;
                    margin: 0 0 0 1rem;
                }
                .timeline input, .volume-slider input {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    opacity: 0;
                    cursor: pointer;
                    z-index: 2;
                }
                .timeline-fill, .volume-fill {
                    height: 100%;
                    background: var(--gold-400);
                    border-radius: 999px;
                }
                .volume-tooltip {
                    position: absolute;
                    top: -2rem;
                    right: 0;
                    font-size: 0.65rem;
                    background: #fff;
                    color: var(--charcoal);
                    padding: 0.1rem 0.4rem;
                    border-radius: 4px;
                    opacity: 0;
                    transition: opacity 0.2s ease;
                }
                .volume-slider:hover .volume-tooltip {
                    opacity: 1;
                }
                .control-row, .control-group {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    color: #fff;
                }
                .control-button {
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.25rem;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .control-button:hover {
                    color: var(--gold-400);
                }
                .control-button.disabled {
                    color: #6b7280;
                    cursor: not-allowed;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: PlayerState, action: PlayerAction) -> PlayerState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn silent_asset_never_unmutes() {
        let mut state = PlayerState::new(false);
        assert!(state.muted);
        assert_eq!(state.volume, 0.0);

        for _ in 0..3 {
            assert_eq!(state.toggle_mute(), MuteOutcome::NoSound);
            assert!(state.muted);
            assert!(state.no_sound_notice);
            state.no_sound_notice = false;
        }

        state.set_volume(0.8);
        assert_eq!(state.volume, 0.0);
        assert!(state.muted);
    }

    #[test]
    fn unmuting_at_zero_volume_restores_half() {
        let mut state = PlayerState::new(true);
        state.set_volume(0.0);
        assert!(state.muted);
        assert_eq!(state.toggle_mute(), MuteOutcome::Unmuted);
        assert_eq!(state.volume, 0.5);
        assert_eq!(state.toggle_mute(), MuteOutcome::Muted);
        assert_eq!(state.volume, 0.5);
    }

    #[test]
    fn volume_is_clamped_to_unit_range() {
        let mut state = PlayerState::new(true);
        for (requested, expected) in [(1.7, 1.0), (-0.3, 0.0), (0.42, 0.42), (f64::NAN, 0.0)] {
            state.set_volume(requested);
            assert_eq!(state.volume, expected);
            assert!((0.0..=1.0).contains(&state.volume));
        }
    }

    #[test]
    fn seek_is_clamped_to_duration() {
        let mut state = PlayerState::new(true);
        state.set_duration(596.5);
        assert_eq!(state.seek(700.0), 596.5);
        assert_eq!(state.seek(-4.0), 0.0);
        assert_eq!(state.seek(120.25), 120.25);
    }

    #[test]
    fn unknown_duration_pins_seek_to_zero() {
        let mut state = PlayerState::new(true);
        state.set_duration(f64::NAN);
        assert_eq!(state.duration, 0.0);
        assert_eq!(state.seek(30.0), 0.0);
        state.set_duration(f64::INFINITY);
        assert_eq!(state.seek(30.0), 0.0);
        assert_eq!(state.progress_percent(), 0.0);
    }

    #[test]
    fn controls_hide_only_while_playing_and_not_dragging() {
        let mut state = PlayerState::new(true);
        state.idle_elapsed();
        assert!(state.controls_visible, "paused player keeps controls");

        state.toggle_play();
        state.volume_dragging = true;
        state.idle_elapsed();
        assert!(state.controls_visible, "dragging keeps controls");

        state.volume_dragging = false;
        state.idle_elapsed();
        assert!(!state.controls_visible);

        state.pointer_moved();
        assert!(state.controls_visible);
    }

    #[test]
    fn pausing_brings_controls_back() {
        let mut state = PlayerState::new(true);
        state.toggle_play();
        state.idle_elapsed();
        assert!(!state.controls_visible);
        state.toggle_play();
        assert!(!state.playing);
        assert!(state.controls_visible);
    }

    #[test]
    fn reducer_handles_end_and_load_failure() {
        let state = reduce(PlayerState::new(true), PlayerAction::TogglePlay);
        assert!(state.playing);
        let state = reduce(state, PlayerAction::Ended);
        assert!(!state.playing);

        let state = reduce(reduce(state, PlayerAction::TogglePlay), PlayerAction::LoadFailed);
        assert!(state.load_failed);
        assert!(!state.playing);
    }

    #[test]
    fn fullscreen_tracks_the_document() {
        let state = reduce(PlayerState::new(true), PlayerAction::SetFullscreen(true));
        assert!(state.fullscreen);
        // leaving with Esc reports false without the toggle being pressed
        let state = reduce(state, PlayerAction::SetFullscreen(false));
        assert!(!state.fullscreen);
        let state = reduce(state, PlayerAction::SetFullscreen(false));
        assert!(!state.fullscreen);
    }

    #[test]
    fn notice_is_dismissed_by_action() {
        let state = reduce(PlayerState::new(false), PlayerAction::ToggleMute);
        assert!(state.no_sound_notice);
        let state = reduce(state, PlayerAction::DismissNotice);
        assert!(!state.no_sound_notice);
        assert!(state.muted);
    }
}
