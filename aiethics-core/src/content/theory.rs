use super::{Block, ContentBody, Section, Tone};
use crate::panel::PanelId;

pub(super) static BODY: ContentBody = ContentBody {
    panel: PanelId::Part1,
    title: "Part 1: Theoretical Understanding",
    lead: None,
    sections: &[
        Section {
            heading: "Q1: Algorithmic Bias",
            tone: Tone::Accent,
            blocks: &[
                Block::Labeled {
                    label: "Definition",
                    text: "Algorithmic bias refers to systematic and repeatable errors in computer \
                           systems that create unfair outcomes, favoring certain groups over others \
                           based on characteristics like race, gender, age, or socioeconomic status.",
                },
                Block::Labeled {
                    label: "Example 1: Healthcare Risk Prediction",
                    text: "An algorithm used to identify patients needing extra medical care \
                           systematically underestimated the needs of Black patients. The bias \
                           arose because the algorithm used healthcare costs as a proxy for health \
                           needs, but Black patients historically had less access to healthcare and \
                           lower spending despite equivalent illness severity.",
                },
                Block::Labeled {
                    label: "Example 2: Credit Scoring Systems",
                    text: "Machine learning models for credit decisions may discriminate against \
                           applicants from certain zip codes or with non-traditional credit \
                           histories, perpetuating historical lending discrimination even when race \
                           is not explicitly included as a feature.",
                },
            ],
        },
        Section {
            heading: "Q2: Transparency vs Explainability",
            tone: Tone::Accent,
            blocks: &[
                Block::Subheading {
                    text: "Transparency",
                    tone: Tone::Info,
                },
                Block::Paragraph(
                    "Refers to the openness about how an AI system works, including documentation \
                     of data sources, model architecture, training procedures, and decision-making \
                     processes. It answers what and how the system operates.",
                ),
                Block::Subheading {
                    text: "Explainability",
                    tone: Tone::Positive,
                },
                Block::Paragraph(
                    "Refers to the ability to understand why a specific decision was made in \
                     human-interpretable terms. It answers why a particular output was produced \
                     for a given input.",
                ),
                Block::Term("Why Both Matter:"),
                Block::LabeledBullet {
                    label: "Accountability",
                    text: "Transparency enables auditing; explainability enables contesting decisions",
                },
                Block::LabeledBullet {
                    label: "Trust",
                    text: "Users need to understand both the system and individual outcomes",
                },
                Block::LabeledBullet {
                    label: "Debugging",
                    text: "Transparency helps identify systemic issues; explainability helps fix \
                           individual errors",
                },
                Block::LabeledBullet {
                    label: "Compliance",
                    text: "Regulations like GDPR require both system documentation and explanation \
                           of automated decisions",
                },
            ],
        },
        Section {
            heading: "Q3: GDPR Impact on AI Development",
            tone: Tone::Accent,
            blocks: &[
                Block::Paragraph(
                    "The General Data Protection Regulation significantly impacts AI development \
                     in the EU through several key provisions:",
                ),
                Block::Labeled {
                    label: "Right to Explanation",
                    text: "Individuals have the right to obtain meaningful information about the \
                           logic involved in automated decision-making, requiring explainable AI \
                           systems.",
                },
                Block::Labeled {
                    label: "Data Minimization",
                    text: "AI systems must collect only necessary data, limiting the scope of \
                           training datasets and feature engineering.",
                },
                Block::Labeled {
                    label: "Purpose Limitation",
                    text: "Data collected for one purpose cannot be repurposed for AI training \
                           without explicit consent, restricting data reuse.",
                },
                Block::Labeled {
                    label: "Right to Be Forgotten",
                    text: "Requires mechanisms to remove individual data from training sets and \
                           potentially retrain models.",
                },
                Block::Labeled {
                    label: "Privacy by Design",
                    text: "AI systems must incorporate privacy protections from the outset, \
                           including techniques like differential privacy and federated learning.",
                },
            ],
        },
        Section {
            heading: "Ethical Principles Matching",
            tone: Tone::Accent,
            blocks: &[
                Block::Labeled {
                    label: "A) Justice → 4",
                    text: "Fair distribution of AI benefits and risks",
                },
                Block::Labeled {
                    label: "B) Non-maleficence → 1",
                    text: "Ensuring AI does not harm individuals or society",
                },
                Block::Labeled {
                    label: "C) Autonomy → 2",
                    text: "Respecting users right to control their data and decisions",
                },
                Block::Labeled {
                    label: "D) Sustainability → 3",
                    text: "Designing AI to be environmentally friendly",
                },
            ],
        },
    ],
};
