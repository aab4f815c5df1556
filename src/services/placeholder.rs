//! Structural placeholders shown while a fetch is pending. Each layout mirrors
//! the element shapes of the page it stands in for; a single template partial
//! renders any of them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Strong,
    Medium,
    Soft,
    Accent,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Self::Strong => "bg-gray-300",
            Self::Medium => "bg-gray-200",
            Self::Soft => "bg-gray-100",
            Self::Accent => "bg-blue-300",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    height: &'static str,
    width: &'static str,
    tone: Tone,
}

impl Bar {
    pub fn new(height: &'static str, width: &'static str, tone: Tone) -> Self {
        Self {
            height,
            width,
            tone,
        }
    }

    pub fn class(&self) -> String {
        format!("{} {} {} rounded", self.height, self.width, self.tone.class())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub class: &'static str,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub class: &'static str,
    pub regions: Vec<Region>,
}

fn text_lines(tone: Tone, widths: &[&'static str]) -> Vec<Bar> {
    widths.iter().map(|w| Bar::new("h-4", *w, tone)).collect()
}

impl Placeholder {
    /// Home page "today in history" card: image beside title, date, preview, button.
    pub fn history_card() -> Self {
        let mut text = vec![
            Bar::new("h-8", "w-3/4", Tone::Strong),
            Bar::new("h-5", "w-1/4", Tone::Medium),
        ];
        text.extend(text_lines(Tone::Soft, &["w-full", "w-5/6", "w-2/3"]));
        text.push(Bar::new("h-10", "w-40", Tone::Accent));

        Self {
            class: "flex flex-col md:flex-row gap-8 items-center bg-white p-6 rounded-xl shadow-lg",
            regions: vec![
                Region {
                    class: "w-full md:w-1/2",
                    bars: vec![Bar::new("h-64", "w-full", Tone::Medium)],
                },
                Region {
                    class: "flex-1 w-full space-y-4",
                    bars: text,
                },
            ],
        }
    }

    /// One tile in the latest-articles grid.
    pub fn article_card() -> Self {
        Self {
            class: "bg-white rounded-2xl shadow-lg",
            regions: vec![
                Region {
                    class: "w-full",
                    bars: vec![Bar::new("h-56", "w-full", Tone::Medium)],
                },
                Region {
                    class: "p-6 space-y-3",
                    bars: vec![
                        Bar::new("h-6", "w-3/4", Tone::Strong),
                        Bar::new("h-4", "w-full", Tone::Soft),
                        Bar::new("h-4", "w-2/3", Tone::Soft),
                    ],
                },
            ],
        }
    }

    pub fn article_detail() -> Self {
        let mut main = vec![
            Bar::new("h-64", "w-full", Tone::Strong),
            Bar::new("h-10", "w-3/4", Tone::Strong),
            Bar::new("h-5", "w-1/3", Tone::Strong),
        ];
        main.extend(text_lines(
            Tone::Strong,
            &["w-full", "w-full", "w-5/6", "w-4/6", "w-2/3"],
        ));

        Self {
            class: "flex flex-col lg:flex-row gap-8",
            regions: vec![
                Region {
                    class: "lg:w-2/3 space-y-4",
                    bars: main,
                },
                Region {
                    class: "lg:w-1/3 border-l border-gray-200 pl-6 mt-10 lg:mt-0 space-y-3",
                    bars: vec![
                        Bar::new("h-4", "w-2/3", Tone::Strong),
                        Bar::new("h-3", "w-1/2", Tone::Strong),
                        Bar::new("h-3", "w-1/4", Tone::Strong),
                        Bar::new("h-3", "w-1/3", Tone::Strong),
                        Bar::new("h-3", "w-1/5", Tone::Strong),
                    ],
                },
            ],
        }
    }

    pub fn history_detail() -> Self {
        let mut main = vec![
            Bar::new("h-64", "w-full", Tone::Strong),
            Bar::new("h-8", "w-2/3", Tone::Strong),
            Bar::new("h-5", "w-1/3", Tone::Strong),
        ];
        main.extend(text_lines(Tone::Strong, &["w-full", "w-5/6", "w-4/6"]));

        let mut aside = vec![Bar::new("h-6", "w-1/2", Tone::Strong)];
        aside.extend(text_lines(Tone::Medium, &["w-full", "w-5/6", "w-4/6"]));

        Self {
            class: "flex flex-col lg:flex-row gap-8",
            regions: vec![
                Region {
                    class: "lg:w-2/3 space-y-4",
                    bars: main,
                },
                Region {
                    class: "lg:w-1/3 border-l border-gray-200 pl-6 mt-10 lg:mt-0 space-y-2",
                    bars: aside,
                },
            ],
        }
    }

    /// `count` copies of one layout, e.g. a grid of card placeholders.
    pub fn repeat(layout: fn() -> Self, count: usize) -> Vec<Self> {
        (0..count).map(|_| layout()).collect()
    }
}
