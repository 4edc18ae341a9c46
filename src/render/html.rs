use super::{CanvasSlot, Control, FieldView, SectionView, SlideDirection, SlideIn};
use maud::{html, Markup, Render};

const INPUT_CLASS: &str = "bg-tertiary placeholder:text-secondary rounded-lg border-none px-6 py-4 font-medium text-white outline-none";
const BUTTON_CLASS: &str = "bg-tertiary shadow-primary w-fit rounded-xl px-8 py-3 font-bold text-white shadow-md outline-none";

impl SlideIn {
    fn data_motion(&self) -> &'static str {
        match self.direction {
            SlideDirection::Left => "slide-in-left",
            SlideDirection::Right => "slide-in-right",
        }
    }
}

impl Render for FieldView {
    fn render(&self) -> Markup {
        html! {
            label class="flex flex-col" {
                span class="mb-4 font-medium text-white" { (self.label) }
                @match self.control {
                    Control::TextArea { rows } => {
                        textarea name=(self.key) rows=(rows) placeholder=(self.placeholder) class=(INPUT_CLASS) {
                            (self.value)
                        }
                    },
                    Control::Input { input_type } => {
                        input type=(input_type) name=(self.key) value=(self.value) placeholder=(self.placeholder) class=(INPUT_CLASS);
                    },
                }
                @if let Some(error) = &self.error {
                    p class="mt-2 text-red-500 text-sm" { (error) }
                }
            }
        }
    }
}

impl Render for CanvasSlot {
    fn render(&self) -> Markup {
        html! {
            canvas id=(self.id) aria-hidden="true" {}
        }
    }
}

impl Render for SectionView {
    fn render(&self) -> Markup {
        html! {
            section id=(self.id) class="relative z-0 mx-auto max-w-7xl px-6 py-10" {
                div class="flex flex-col-reverse gap-10 overflow-hidden xl:mt-12 xl:flex-row" {
                    div class="bg-black-100 flex-[0.75] rounded-2xl p-8"
                        data-motion=(self.form_motion.data_motion())
                        data-delay=(self.form_motion.delay)
                        data-duration=(self.form_motion.duration) {
                        p class="sectionSubText" { (self.header.sub_text) }
                        h2 class="sectionHeadText" { (self.header.title) }
                        form class="mt-12 flex flex-col gap-8" method="post" {
                            @for field in &self.fields {
                                (field)
                            }
                            button type="submit" class=(BUTTON_CLASS) { (self.submit_label) }
                            @if let Some(status) = &self.status {
                                p class={ "mt-4 text-center font-medium " (status.color_class()) } {
                                    (status.text)
                                }
                            }
                        }
                    }
                    div class="h-[350px] md:h-[550px] xl:h-auto xl:flex-1"
                        data-motion=(self.canvas_motion.data_motion())
                        data-delay=(self.canvas_motion.delay)
                        data-duration=(self.canvas_motion.duration) {
                        (self.canvas)
                    }
                }
            }
        }
    }
}
