//! Keyword lookup answering questions about the sample document.

use common::chat_message::{ChatAnswer, ChatSource};

struct CannedAnswer {
    keywords: &'static [&'static str],
    content: &'static str,
    sources: &'static [(&'static str, &'static str)],
    confidence: f32,
}

const CANNED_ANSWERS: &[CannedAnswer] = &[
    CannedAnswer {
        keywords: &["nstemi", "heart attack"],
        content: "NSTEMI stands for Non-ST Elevation Myocardial Infarction. This is a type of heart attack where one of the arteries supplying blood to your heart muscle becomes partially blocked. Unlike a STEMI (where the artery is completely blocked), an NSTEMI is usually less severe but still requires immediate treatment. The good news is that with proper medication and follow-up care, most people recover well from this type of heart attack.",
        sources: &[
            ("Heart Attack Types - Mayo Clinic", "https://www.mayoclinic.org/diseases-conditions/heart-attack"),
            ("NSTEMI Treatment - AHA", "https://www.heart.org/"),
        ],
        confidence: 0.9,
    },
    CannedAnswer {
        keywords: &["aspirin", "medication", "medicine"],
        content: "The aspirin and ticagrelor you've been prescribed work together to prevent blood clots. Aspirin (81mg daily) is a low-dose \"baby aspirin\" that helps keep your blood from clotting too easily. Ticagrelor (90mg twice daily) is a stronger blood thinner that specifically prevents platelets from sticking together. Together, these medications significantly reduce your risk of having another heart attack. It's very important to take them exactly as prescribed and not to stop them without talking to your doctor first.",
        sources: &[
            ("Antiplatelet Therapy - AHA", "https://www.heart.org/"),
            ("Aspirin for Heart Disease - NIH", "https://www.nhlbi.nih.gov/"),
        ],
        confidence: 0.9,
    },
    CannedAnswer {
        keywords: &["follow up", "next", "appointment"],
        content: "Your follow-up appointment is very important for monitoring your recovery. Your cardiologist will check how well your heart is healing, review your medications, and may order tests like an EKG or echocardiogram. They'll also discuss lifestyle changes that can help prevent future heart problems, such as diet, exercise, and stress management. Don't skip this appointment - it's a crucial part of your recovery process.",
        sources: &[],
        confidence: 0.85,
    },
];

const FALLBACK_ANSWER: &str = "I can help explain the medical terms and recommendations in your discharge summary. Try asking me about specific medications, your diagnosis (NSTEMI), or what you should do for follow-up care. I'm here to make sure you understand everything about your treatment plan.";
const FALLBACK_CONFIDENCE: f32 = 0.7;

/// `None` for blank questions. No inference happens here.
pub fn answer_question(question: &str) -> Option<ChatAnswer> {
    let question = question.trim().to_lowercase();
    if question.is_empty() {
        return None;
    }
    let answer = CANNED_ANSWERS
        .iter()
        .find(|a| a.keywords.iter().any(|k| question.contains(k)));
    let answer = match answer {
        Some(a) => ChatAnswer {
            content: a.content.to_string(),
            sources: a
                .sources
                .iter()
                .map(|(label, url)| ChatSource { label: label.to_string(), url: url.to_string() })
                .collect(),
            confidence: a.confidence,
        },
        None => ChatAnswer {
            content: FALLBACK_ANSWER.to_string(),
            sources: vec![],
            confidence: FALLBACK_CONFIDENCE,
        },
    };
    Some(answer)
}
