use yew::prelude::*;
use yew_hooks::use_interval;

use crate::components::section::{Section, SectionHeader};
use crate::models::Testimonial;

pub const ADVANCE_MS: u32 = 6_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    pub index: usize,
}

impl Carousel {
    pub fn advance(self, len: usize) -> Self {
        if len == 0 {
            return Self::default();
        }
        Self {
            index: (self.index + 1) % len,
        }
    }

    pub fn select(self, index: usize, len: usize) -> Self {
        if index < len {
            Self { index }
        } else {
            self
        }
    }

    // keeps the index valid when the list shrinks under it
    pub fn current(self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.index.min(len - 1))
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub testimonials: Vec<Testimonial>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let carousel = use_state(Carousel::default);
    let len = props.testimonials.len();

    {
        let carousel = carousel.clone();
        let millis = if len == 0 { 0 } else { ADVANCE_MS };
        use_interval(move || carousel.set(carousel.advance(len)), millis);
    }

    let Some(current) = carousel.current(len) else {
        return html! {};
    };
    let item = &props.testimonials[current];

    html! {
        <Section id="testimonials" class="testimonials-section">
            <SectionHeader title="Love Letters" subtitle="Kind Words" />
            <div class="testimonial-stage">
                <div key={item.id} class="testimonial-card">
                    <div class="quote-badge">{"❝"}</div>
                    <div class="testimonial-stars">{"★★★★★"}</div>
                    <h3>{ &item.title }</h3>
                    <p class="testimonial-text">{ format!("\"{}\"", item.text) }</p>
                    <div class="testimonial-author">
                        <img src={item.image.clone()} alt={item.name.clone()} />
                        <div>
                            <h4>{ &item.name }</h4>
                            <p>{ &item.location }</p>
                        </div>
                    </div>
                </div>
            </div>
            <div class="carousel-dots">
                { for (0..len).map(|idx| {
                    let onclick = {
                        let carousel = carousel.clone();
                        Callback::from(move |_: MouseEvent| carousel.set(carousel.select(idx, len)))
                    };
                    html! {
                        <button
                            key={idx}
                            class={classes!("carousel-dot", (idx == current).then(|| "active"))}
                            aria-label={format!("Show testimonial {}", idx + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_and_wraps() {
        let carousel = Carousel::default();
        assert_eq!(carousel.advance(3).index, 1);
        assert_eq!(carousel.advance(3).advance(3).advance(3).index, 0);
    }

    #[test]
    fn dots_select_directly() {
        let carousel = Carousel::default().select(2, 3);
        assert_eq!(carousel.index, 2);
        assert_eq!(carousel.select(7, 3).index, 2);
    }

    #[test]
    fn empty_list_shows_nothing() {
        assert_eq!(Carousel::default().current(0), None);
        assert_eq!(Carousel { index: 4 }.current(2), Some(1));
        assert_eq!(Carousel::default().advance(0).index, 0);
    }
}
