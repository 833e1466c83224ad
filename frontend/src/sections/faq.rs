use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::section::{Section, SectionHeader};
use crate::models::FaqItem;

pub const MAX_FEATURED: usize = 5;

pub fn featured(faqs: &[FaqItem]) -> Vec<FaqItem> {
    faqs.iter()
        .filter(|f| f.is_featured)
        .take(MAX_FEATURED)
        .cloned()
        .collect()
}

/// At most one panel open; the first starts open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Default for Accordion {
    fn default() -> Self {
        Self { open: Some(0) }
    }
}

impl Accordion {
    pub fn toggle(self, index: usize) -> Self {
        if self.open == Some(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }

    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub faqs: Vec<FaqItem>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let accordion = use_state(Accordion::default);
    let items = featured(&props.faqs);

    html! {
        <Section id="faq" class="faq-section">
            <SectionHeader title="Common Questions" subtitle="FAQ" />
            <div class="faq-list">
                { for items.iter().enumerate().map(|(index, item)| {
                    let is_open = accordion.is_open(index);
                    let toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            accordion.set(accordion.toggle(index));
                        })
                    };
                    html! {
                        <div key={item.id} class={classes!("faq-item", is_open.then(|| "open"))}>
                            <button class="faq-question" onclick={toggle}>
                                <span class="question-text">{ &item.question }</span>
                                <span class="toggle-icon">{ if is_open { "−" } else { "+" } }</span>
                            </button>
                            if is_open {
                                <div class="faq-answer">{ &item.answer }</div>
                            }
                        </div>
                    }
                }) }
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_store;

    #[test]
    fn shows_only_featured_questions() {
        let items = featured(&mock_store::faqs());
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|f| f.is_featured));
    }

    #[test]
    fn caps_at_five() {
        let many: Vec<FaqItem> = (0..9)
            .map(|id| FaqItem {
                id,
                question: format!("Q{}", id),
                answer: String::new(),
                is_featured: true,
            })
            .collect();
        let items = featured(&many);
        assert_eq!(items.len(), MAX_FEATURED);
        assert_eq!(items[0].id, 0);
    }

    #[test]
    fn one_panel_open_at_a_time() {
        let accordion = Accordion::default();
        assert!(accordion.is_open(0));

        let accordion = accordion.toggle(2);
        assert!(accordion.is_open(2));
        assert!(!accordion.is_open(0));

        let accordion = accordion.toggle(2);
        assert!((0..5).all(|i| !accordion.is_open(i)));
    }
}
