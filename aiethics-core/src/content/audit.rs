use super::{Block, ContentBody, Section, Tone};
use crate::panel::PanelId;

pub(super) static BODY: ContentBody = ContentBody {
    panel: PanelId::Part3,
    title: "Part 3: Practical Audit",
    lead: None,
    sections: &[
        Section {
            heading: "COMPAS Fairness Audit",
            tone: Tone::Accent,
            blocks: &[Block::Paragraph(
                "This section provides the complete code for auditing the COMPAS Recidivism \
                 Dataset using AI Fairness 360. The code analyzes racial bias in risk scores and \
                 generates visualizations.",
            )],
        },
        Section {
            heading: "Code Implementation Guide",
            tone: Tone::Plain,
            blocks: &[
                Block::Code("# Download the Python code from the artifact"),
                Block::Code("# Or copy the code provided separately"),
            ],
        },
        Section {
            heading: "Key Analysis Components",
            tone: Tone::Plain,
            blocks: &[
                Block::Labeled {
                    label: "1. Data Loading & Preprocessing",
                    text: "Load COMPAS dataset and prepare for fairness analysis",
                },
                Block::Labeled {
                    label: "2. Bias Metrics Calculation",
                    text: "Compute disparate impact, statistical parity difference, equal \
                           opportunity difference",
                },
                Block::Labeled {
                    label: "3. Visualizations",
                    text: "Generate charts showing false positive rates, risk score distributions \
                           by race",
                },
                Block::Labeled {
                    label: "4. Mitigation Strategies",
                    text: "Apply reweighing and prejudice remover techniques",
                },
            ],
        },
        Section {
            heading: "Expected Findings",
            tone: Tone::Caution,
            blocks: &[Block::Paragraph(
                "The COMPAS audit typically reveals significant racial disparities with Black \
                 defendants receiving higher risk scores and experiencing higher false positive \
                 rates compared to White defendants, even when controlling for actual recidivism \
                 rates.",
            )],
        },
    ],
};
