use super::{Block, ContentBody, Section, Tone};
use crate::panel::PanelId;

pub(super) static BODY: ContentBody = ContentBody {
    panel: PanelId::Part4,
    title: "Part 4: Ethical Reflection",
    lead: Some(
        "Reflect on a personal project (past or future). How will you ensure it adheres to \
         ethical AI principles?",
    ),
    sections: &[
        Section {
            heading: "Project Context",
            tone: Tone::Accent,
            blocks: &[Block::Paragraph(
                "Consider a student loan approval system that uses machine learning to predict \
                 default risk and recommend approval decisions. This touches on critical ethical \
                 considerations around fairness, transparency, and social impact.",
            )],
        },
        Section {
            heading: "Ethical Principles Implementation",
            tone: Tone::Positive,
            blocks: &[
                Block::Term("1. Justice & Fairness"),
                Block::Bullet("Conduct pre-deployment bias audits across demographics"),
                Block::Bullet("Implement fairness constraints ensuring demographic parity"),
                Block::Bullet("Regular monitoring for disparate impact"),
                Block::Bullet("Include diverse stakeholders in design"),
                Block::Term("2. Transparency & Explainability"),
                Block::Bullet("Document all data sources and model architecture"),
                Block::Bullet("Provide clear explanations using LIME or SHAP"),
                Block::Bullet("Disclose use of automated decision-making"),
                Block::Bullet("Publish model cards with performance metrics"),
                Block::Term("3. Privacy & Autonomy"),
                Block::Bullet("Obtain explicit consent for data use"),
                Block::Bullet("Implement data minimization principles"),
                Block::Bullet("Provide opt-out mechanisms"),
                Block::Bullet("Ensure GDPR compliance"),
                Block::Term("4. Non-maleficence"),
                Block::Bullet("Conduct impact assessments to identify harms"),
                Block::Bullet("Implement human oversight for edge cases"),
                Block::Bullet("Create feedback mechanisms"),
                Block::Bullet("Regular audits to detect model drift"),
                Block::Term("5. Accountability"),
                Block::Bullet("Establish clear ownership and responsibility"),
                Block::Bullet("Create audit trails for all decisions"),
                Block::Bullet("Form ethics review board"),
                Block::Bullet("Develop incident response procedures"),
            ],
        },
        Section {
            heading: "Success Metrics",
            tone: Tone::Info,
            blocks: &[
                Block::Bullet("Disparate impact ratio greater than 0.8 across all groups"),
                Block::Bullet("90% of applicants understand decision explanations"),
                Block::Bullet("Zero successful appeals citing discrimination"),
                Block::Bullet("Model performance within 5% across demographics"),
            ],
        },
    ],
};
