use super::{Block, ContentBody, Section, Tone};
use crate::panel::{Icon, PanelId};

pub(super) static BODY: ContentBody = ContentBody {
    panel: PanelId::Overview,
    title: "Overview",
    lead: None,
    sections: &[
        Section {
            heading: "Assignment Structure",
            tone: Tone::Accent,
            blocks: &[Block::Paragraph(
                "This assignment covers theoretical understanding, case study analysis, \
                 practical auditing, and ethical reflection on AI systems.",
            )],
        },
        Section {
            heading: "Deliverables",
            tone: Tone::Plain,
            blocks: &[
                Block::IconBullet {
                    icon: Icon::FileText,
                    text: "PDF with written answers and case analyses",
                },
                Block::IconBullet {
                    icon: Icon::Code,
                    text: "Jupyter Notebook with fairness audit code",
                },
                Block::IconBullet {
                    icon: Icon::Shield,
                    text: "Bonus: Healthcare AI policy document",
                },
            ],
        },
        Section {
            heading: "Tools & Resources",
            tone: Tone::Plain,
            blocks: &[
                Block::Bullet("AI Fairness 360 (IBM)"),
                Block::Bullet("COMPAS Recidivism Dataset"),
                Block::Bullet("EU Ethics Guidelines"),
            ],
        },
    ],
};
