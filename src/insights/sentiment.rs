//! Lexicon-based sentiment analysis for travel reviews.

use serde::Serialize;
use thiserror::Error;

const POSITIVE_WORDS: [&str; 30] = [
    "amazing", "wonderful", "excellent", "fantastic", "great", "good", "nice", "beautiful",
    "stunning", "breathtaking", "incredible", "perfect", "lovely", "enjoyable", "pleasant",
    "satisfying", "outstanding", "superb", "brilliant", "fabulous", "terrific", "awesome",
    "magnificent", "gorgeous", "charming", "delightful", "memorable", "unforgettable",
    "spectacular", "impressive",
];

const NEGATIVE_WORDS: [&str; 30] = [
    "terrible", "awful", "horrible", "bad", "poor", "disappointing", "frustrating", "annoying",
    "boring", "dull", "mediocre", "average", "overpriced", "expensive", "crowded", "noisy",
    "dirty", "uncomfortable", "stressful", "difficult", "problematic", "unpleasant",
    "unsatisfactory", "inadequate", "inferior", "subpar", "lousy", "miserable", "depressing",
    "disgusting",
];

const TRAVEL_PHRASES: [&str; 12] = [
    "great location",
    "excellent service",
    "amazing experience",
    "worth the money",
    "highly recommend",
    "would visit again",
    "poor service",
    "not worth it",
    "disappointing experience",
    "great value",
    "overpriced",
    "clean and comfortable",
];

/// Review topics and the words that signal them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Accommodation,
    Food,
    Service,
    Location,
    Value,
    Atmosphere,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::Accommodation,
        Topic::Food,
        Topic::Service,
        Topic::Location,
        Topic::Value,
        Topic::Atmosphere,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Accommodation => "accommodation",
            Topic::Food => "food",
            Topic::Service => "service",
            Topic::Location => "location",
            Topic::Value => "value",
            Topic::Atmosphere => "atmosphere",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Topic::Accommodation => &["hotel", "room", "bed", "clean", "comfortable", "noisy", "small"],
            Topic::Food => &["restaurant", "meal", "delicious", "tasty", "fresh", "expensive", "cheap"],
            Topic::Service => &["staff", "friendly", "helpful", "rude", "slow", "efficient", "professional"],
            Topic::Location => &["central", "convenient", "accessible", "remote", "far", "close", "walking"],
            Topic::Value => &["worth", "price", "expensive", "cheap", "reasonable", "overpriced", "bargain"],
            Topic::Atmosphere => &["ambiance", "vibe", "mood", "relaxing", "busy", "quiet", "lively"],
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Topic::Accommodation => "Accommodation",
            Topic::Food => "Food",
            Topic::Service => "Service",
            Topic::Location => "Location",
            Topic::Value => "Value",
            Topic::Atmosphere => "Atmosphere",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    fn from_counts(positive: usize, negative: usize) -> Self {
        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentScores {
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    pub polarity: f64,
    pub subjectivity: f64,
    pub custom_score: f64,
    pub positive_words: usize,
    pub negative_words: usize,
    pub total_words: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicInsight {
    pub keywords: Vec<String>,
    pub count: usize,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TravelInsights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<TopicInsight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food: Option<TopicInsight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<TopicInsight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<TopicInsight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<TopicInsight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atmosphere: Option<TopicInsight>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phrases: Vec<String>,
}

impl TravelInsights {
    pub fn get(&self, topic: Topic) -> Option<&TopicInsight> {
        match topic {
            Topic::Accommodation => self.accommodation.as_ref(),
            Topic::Food => self.food.as_ref(),
            Topic::Service => self.service.as_ref(),
            Topic::Location => self.location.as_ref(),
            Topic::Value => self.value.as_ref(),
            Topic::Atmosphere => self.atmosphere.as_ref(),
        }
    }

    fn slot(&mut self, topic: Topic) -> &mut Option<TopicInsight> {
        match topic {
            Topic::Accommodation => &mut self.accommodation,
            Topic::Food => &mut self.food,
            Topic::Service => &mut self.service,
            Topic::Location => &mut self.location,
            Topic::Value => &mut self.value,
            Topic::Atmosphere => &mut self.atmosphere,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    pub text: String,
    pub cleaned_text: String,
    pub overall_sentiment: Sentiment,
    pub sentiment_scores: SentimentScores,
    pub travel_insights: TravelInsights,
    pub recommendations: Vec<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AverageScores {
    pub polarity: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAnalysis {
    pub total_reviews: usize,
    pub overall_sentiment: Sentiment,
    pub sentiment_distribution: SentimentDistribution,
    pub average_scores: AverageScores,
    pub individual_analyses: Vec<SentimentAnalysis>,
    pub summary: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SentimentError {
    #[error("No reviews provided")]
    NoReviews,
}

/// Scores review text against fixed positive and negative lexicons
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, text: &str) -> SentimentAnalysis {
        let cleaned = preprocess(text);
        let words: Vec<&str> = cleaned.split_whitespace().collect();

        let scores = score_words(&words);
        let insights = extract_insights(&words, &cleaned);
        let overall = overall_sentiment(&scores);
        let recommendations = recommendations(overall, &insights);
        let confidence = confidence(&scores);

        SentimentAnalysis {
            text: text.to_string(),
            cleaned_text: cleaned,
            overall_sentiment: overall,
            sentiment_scores: scores,
            travel_insights: insights,
            recommendations,
            confidence,
        }
    }

    /// Aggregate analysis over several reviews; the majority label wins
    pub fn analyze_many(&self, reviews: &[String]) -> Result<ReviewAnalysis, SentimentError> {
        if reviews.is_empty() {
            return Err(SentimentError::NoReviews);
        }

        let analyses: Vec<SentimentAnalysis> = reviews.iter().map(|r| self.analyze(r)).collect();

        let count = |s: Sentiment| analyses.iter().filter(|a| a.overall_sentiment == s).count();
        let distribution = SentimentDistribution {
            positive: count(Sentiment::Positive),
            negative: count(Sentiment::Negative),
            neutral: count(Sentiment::Neutral),
        };

        let n = analyses.len() as f64;
        let polarity = analyses.iter().map(|a| a.sentiment_scores.polarity).sum::<f64>() / n;
        let subjectivity = analyses
            .iter()
            .map(|a| a.sentiment_scores.subjectivity)
            .sum::<f64>()
            / n;

        let overall = Sentiment::from_counts(distribution.positive, distribution.negative);

        Ok(ReviewAnalysis {
            total_reviews: analyses.len(),
            overall_sentiment: overall,
            sentiment_distribution: distribution,
            average_scores: AverageScores {
                polarity: round3(polarity),
                subjectivity: round3(subjectivity),
            },
            summary: format!(
                "Overall {} sentiment with {} positive, {} negative, and {} neutral reviews",
                overall.as_str(),
                distribution.positive,
                distribution.negative,
                distribution.neutral
            ),
            individual_analyses: analyses,
        })
    }
}

/// Lowercase, replace anything but ASCII letters with spaces, collapse runs
pub fn preprocess(text: &str) -> String {
    let lowered: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_positive(word: &str) -> bool {
    POSITIVE_WORDS.contains(&word)
}

fn is_negative(word: &str) -> bool {
    NEGATIVE_WORDS.contains(&word)
}

fn score_words(words: &[&str]) -> SentimentScores {
    let positive = words.iter().filter(|w| is_positive(w)).count();
    let negative = words.iter().filter(|w| is_negative(w)).count();
    let total = words.len();

    let (positive_ratio, negative_ratio) = if total > 0 {
        (positive as f64 / total as f64, negative as f64 / total as f64)
    } else {
        (0.0, 0.0)
    };

    let hits = positive + negative;
    let polarity = if hits > 0 {
        (positive as f64 - negative as f64) / hits as f64
    } else {
        0.0
    };
    let subjectivity = if total > 0 {
        (2.0 * hits as f64 / total as f64).min(1.0)
    } else {
        0.0
    };

    SentimentScores {
        positive_ratio: round3(positive_ratio),
        negative_ratio: round3(negative_ratio),
        polarity: round3(polarity),
        subjectivity: round3(subjectivity),
        custom_score: round3((positive_ratio - negative_ratio) * 2.0),
        positive_words: positive,
        negative_words: negative,
        total_words: total,
    }
}

fn extract_insights(words: &[&str], cleaned: &str) -> TravelInsights {
    let mut insights = TravelInsights::default();

    for topic in Topic::ALL {
        let hits: Vec<&str> = words
            .iter()
            .copied()
            .filter(|w| topic.keywords().contains(w))
            .collect();
        if hits.is_empty() {
            continue;
        }

        let positive = hits.iter().filter(|w| is_positive(w)).count();
        let negative = hits.iter().filter(|w| is_negative(w)).count();
        *insights.slot(topic) = Some(TopicInsight {
            count: hits.len(),
            keywords: hits.into_iter().map(String::from).collect(),
            sentiment: Sentiment::from_counts(positive, negative),
        });
    }

    insights.phrases = TRAVEL_PHRASES
        .iter()
        .filter(|p| cleaned.contains(*p))
        .map(|p| p.to_string())
        .collect();

    insights
}

fn overall_sentiment(scores: &SentimentScores) -> Sentiment {
    let weighted = scores.custom_score * 0.4
        + scores.polarity * 0.4
        + (scores.positive_ratio - scores.negative_ratio) * 0.2;

    if weighted > 0.1 {
        Sentiment::Positive
    } else if weighted < -0.1 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

fn confidence(scores: &SentimentScores) -> f64 {
    let word_confidence = (scores.total_words as f64 / 50.0).min(1.0);
    round3((word_confidence + scores.polarity.abs()) / 2.0)
}

fn recommendations(overall: Sentiment, insights: &TravelInsights) -> Vec<String> {
    let lines: [&str; 3] = match overall {
        Sentiment::Positive => [
            "This review indicates a positive experience",
            "Consider this destination for similar travelers",
            "The positive feedback suggests good value for money",
        ],
        Sentiment::Negative => [
            "This review indicates areas for improvement",
            "Consider addressing the mentioned concerns",
            "May want to look for alternative options",
        ],
        Sentiment::Neutral => [
            "This review shows mixed feelings",
            "Consider additional reviews for better perspective",
            "The experience seems average overall",
        ],
    };

    let mut recommendations: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

    for topic in Topic::ALL {
        match insights.get(topic).map(|i| i.sentiment) {
            Some(Sentiment::Negative) => recommendations.push(format!(
                "Consider improving {} based on feedback",
                topic.as_str()
            )),
            Some(Sentiment::Positive) => {
                recommendations.push(format!("{} received positive feedback", topic.title()))
            }
            _ => {}
        }
    }

    recommendations
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
