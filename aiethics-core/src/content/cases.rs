use super::{Block, ContentBody, Section, Tone};
use crate::panel::PanelId;

pub(super) static BODY: ContentBody = ContentBody {
    panel: PanelId::Part2,
    title: "Part 2: Case Study Analysis",
    lead: None,
    sections: &[
        Section {
            heading: "Case 1: Amazon Biased Hiring Tool",
            tone: Tone::Accent,
            blocks: &[
                Block::Subheading {
                    text: "1. Source of Bias",
                    tone: Tone::Critical,
                },
                Block::LabeledBullet {
                    label: "Training Data Bias",
                    text: "The model was trained on resumes submitted over 10 years, predominantly \
                           from male candidates in tech roles.",
                },
                Block::LabeledBullet {
                    label: "Feature Engineering Issues",
                    text: "The system learned to penalize resumes with gender-related terms.",
                },
                Block::LabeledBullet {
                    label: "Proxy Variables",
                    text: "Patterns correlated with gender became implicit indicators.",
                },
                Block::Subheading {
                    text: "2. Three Fixes for Fairness",
                    tone: Tone::Positive,
                },
                Block::Labeled {
                    label: "Fix 1: Balanced Training Data",
                    text: "Collect and curate a balanced dataset with equal representation of \
                           successful candidates across genders. Use techniques like stratified \
                           sampling and reweighting.",
                },
                Block::Labeled {
                    label: "Fix 2: Remove Gender-Correlated Features",
                    text: "Conduct feature importance analysis to identify and remove features \
                           that serve as proxies for gender. Implement adversarial debiasing \
                           techniques.",
                },
                Block::Labeled {
                    label: "Fix 3: Fairness Constraints During Training",
                    text: "Implement algorithmic fairness constraints like demographic parity or \
                           equalized odds during model training using AI Fairness 360 techniques.",
                },
                Block::Subheading {
                    text: "3. Fairness Evaluation Metrics",
                    tone: Tone::Info,
                },
                Block::LabeledBullet {
                    label: "Demographic Parity",
                    text: "Selection rates should be similar across genders",
                },
                Block::LabeledBullet {
                    label: "Equal Opportunity",
                    text: "True Positive Rate parity for qualified candidates",
                },
                Block::LabeledBullet {
                    label: "Equalized Odds",
                    text: "Both TPR and FPR should be equal across groups",
                },
                Block::LabeledBullet {
                    label: "Disparate Impact Ratio",
                    text: "Ratio of selection rates should be greater than 0.8",
                },
                Block::LabeledBullet {
                    label: "Calibration",
                    text: "Predicted probabilities should match actual outcomes equally",
                },
            ],
        },
        Section {
            heading: "Case 2: Facial Recognition in Policing",
            tone: Tone::Accent,
            blocks: &[
                Block::Subheading {
                    text: "1. Ethical Risks",
                    tone: Tone::Critical,
                },
                Block::Labeled {
                    label: "Wrongful Arrests",
                    text: "Higher false positive rates for minorities lead to wrongful detentions \
                           and investigations, disproportionately affecting Black individuals.",
                },
                Block::Labeled {
                    label: "Privacy and Surveillance",
                    text: "Mass surveillance capabilities enable tracking individuals without \
                           consent, creating a chilling effect on freedom of assembly and protest.",
                },
                Block::Labeled {
                    label: "Systemic Discrimination",
                    text: "Biased technology amplifies existing racial disparities in policing, \
                           creating feedback loops that reinforce discrimination.",
                },
                Block::Labeled {
                    label: "Erosion of Trust",
                    text: "Deployment of biased technology damages community-police relations and \
                           undermines trust in law enforcement.",
                },
                Block::Subheading {
                    text: "2. Responsible Deployment Policies",
                    tone: Tone::Positive,
                },
                Block::Labeled {
                    label: "Mandatory Independent Auditing",
                    text: "Require third-party testing for accuracy across demographic groups \
                           before procurement. Establish minimum accuracy thresholds with less \
                           than 1% disparity across races.",
                },
                Block::Labeled {
                    label: "Human-in-the-Loop Requirements",
                    text: "Facial recognition should only provide investigative leads, never serve \
                           as sole basis for arrest. Require human verification and additional \
                           corroborating evidence.",
                },
                Block::Labeled {
                    label: "Transparency and Public Oversight",
                    text: "Public disclosure of when and how facial recognition is used, with \
                           community input in deployment decisions and civilian oversight boards.",
                },
                Block::Labeled {
                    label: "Limited Scope and Purpose",
                    text: "Restrict use to serious crimes only, prohibit real-time surveillance at \
                           protests, and implement strict data retention limits.",
                },
                Block::Labeled {
                    label: "Accountability Mechanisms",
                    text: "Create clear liability frameworks for wrongful identifications, \
                           mandatory reporting of false matches, and independent review of all \
                           cases.",
                },
            ],
        },
    ],
};
