//! The business question bank.
//!
//! A fixed catalog of questions the product claims to answer, grouped
//! into seven categories. Ids are stable and dense from 1.

use crate::error::{MockError, MockResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionCategory {
    #[serde(rename = "Fraud Analysis")]
    FraudAnalysis,
    #[serde(rename = "Device Comparison")]
    DeviceComparison,
    #[serde(rename = "Category Performance")]
    CategoryPerformance,
    #[serde(rename = "Time Trends")]
    TimeTrends,
    Demographics,
    #[serde(rename = "Geographic Insights")]
    GeographicInsights,
    #[serde(rename = "Revenue Metrics")]
    RevenueMetrics,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 7] = [
        Self::FraudAnalysis,
        Self::DeviceComparison,
        Self::CategoryPerformance,
        Self::TimeTrends,
        Self::Demographics,
        Self::GeographicInsights,
        Self::RevenueMetrics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FraudAnalysis       => "Fraud Analysis",
            Self::DeviceComparison    => "Device Comparison",
            Self::CategoryPerformance => "Category Performance",
            Self::TimeTrends          => "Time Trends",
            Self::Demographics        => "Demographics",
            Self::GeographicInsights  => "Geographic Insights",
            Self::RevenueMetrics      => "Revenue Metrics",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuestionCategory {
    type Err = MockError;

    fn from_str(s: &str) -> MockResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MockError::UnknownLabel {
                kind: "question category",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id:       u32,
    pub question: &'static str,
    pub category: QuestionCategory,
}

pub fn all_questions() -> Vec<Question> {
    QUESTIONS
        .iter()
        .map(|&(id, category, question)| Question { id, question, category })
        .collect()
}

pub fn questions_in(category: QuestionCategory) -> Vec<Question> {
    all_questions()
        .into_iter()
        .filter(|q| q.category == category)
        .collect()
}

pub fn find_question(id: u32) -> Option<Question> {
    all_questions().into_iter().find(|q| q.id == id)
}

/// Case-insensitive substring search over question text.
pub fn search_questions(term: &str) -> Vec<Question> {
    let needle = term.trim().to_lowercase();
    all_questions()
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect()
}

const QUESTIONS: [(u32, QuestionCategory, &str); 123] = [
    // Fraud Analysis
    (1, QuestionCategory::FraudAnalysis, "What is the overall fraud rate across all transactions?"),
    (2, QuestionCategory::FraudAnalysis, "Which device has the highest fraud rate?"),
    (3, QuestionCategory::FraudAnalysis, "Which category has the most fraudulent transactions?"),
    (4, QuestionCategory::FraudAnalysis, "What is the average amount of a fraudulent transaction?"),
    (5, QuestionCategory::FraudAnalysis, "Are fraud transactions increasing month over month?"),
    (6, QuestionCategory::FraudAnalysis, "Which region has the highest fraud percentage?"),
    (7, QuestionCategory::FraudAnalysis, "At what time do most fraud transactions occur?"),
    (8, QuestionCategory::FraudAnalysis, "What percentage of UPI payments are fraudulent?"),
    (9, QuestionCategory::FraudAnalysis, "Is fraud more common on weekends or weekdays?"),
    (10, QuestionCategory::FraudAnalysis, "Which age group is most vulnerable to fraud?"),
    (11, QuestionCategory::FraudAnalysis, "Are high-value transactions more likely to be fraudulent?"),
    (12, QuestionCategory::FraudAnalysis, "Which payment method has the lowest fraud incidence?"),
    (13, QuestionCategory::FraudAnalysis, "How does fraud rate compare between new and returning users?"),
    (14, QuestionCategory::FraudAnalysis, "What is the fraud detection rate by category?"),
    (15, QuestionCategory::FraudAnalysis, "Which city has the fastest growing fraud rate?"),
    (16, QuestionCategory::FraudAnalysis, "How many fraud transactions were reversed successfully?"),
    (17, QuestionCategory::FraudAnalysis, "What is the correlation between transaction time and fraud likelihood?"),
    (18, QuestionCategory::FraudAnalysis, "Are there seasonal patterns in fraud activity?"),
    (19, QuestionCategory::FraudAnalysis, "Which merchant category code has the highest fraud rate?"),
    (20, QuestionCategory::FraudAnalysis, "What is the average time to detect a fraudulent transaction?"),
    (21, QuestionCategory::FraudAnalysis, "How does fraud rate vary by transaction amount range?"),
    (22, QuestionCategory::FraudAnalysis, "What percentage of flagged transactions are false positives?"),

    // Device Comparison
    (23, QuestionCategory::DeviceComparison, "Which device generates the most revenue?"),
    (24, QuestionCategory::DeviceComparison, "What is the average order value per device type?"),
    (25, QuestionCategory::DeviceComparison, "Which device has the highest transaction success rate?"),
    (26, QuestionCategory::DeviceComparison, "How does session duration compare across devices?"),
    (27, QuestionCategory::DeviceComparison, "Which device has the highest cart abandonment rate?"),
    (28, QuestionCategory::DeviceComparison, "Are iOS users spending more than Android users?"),
    (29, QuestionCategory::DeviceComparison, "Which device type has the fastest checkout time?"),
    (30, QuestionCategory::DeviceComparison, "What is the device distribution of active users?"),
    (31, QuestionCategory::DeviceComparison, "Which device has the highest repeat purchase rate?"),
    (32, QuestionCategory::DeviceComparison, "How does app crash rate compare by device?"),
    (33, QuestionCategory::DeviceComparison, "Which device generates the most Food category orders?"),
    (34, QuestionCategory::DeviceComparison, "What is the conversion rate by device type?"),
    (35, QuestionCategory::DeviceComparison, "Which device has the most peak-hour activity?"),
    (36, QuestionCategory::DeviceComparison, "How does average transaction value trend on Android vs iOS?"),
    (37, QuestionCategory::DeviceComparison, "Which device type has the highest customer satisfaction?"),
    (38, QuestionCategory::DeviceComparison, "What is the refund rate by device platform?"),
    (39, QuestionCategory::DeviceComparison, "Which device has the highest coupon usage rate?"),

    // Category Performance
    (40, QuestionCategory::CategoryPerformance, "Which category has the highest total revenue?"),
    (41, QuestionCategory::CategoryPerformance, "What is the average order value per category?"),
    (42, QuestionCategory::CategoryPerformance, "Which category is growing the fastest?"),
    (43, QuestionCategory::CategoryPerformance, "Which category has the most repeat customers?"),
    (44, QuestionCategory::CategoryPerformance, "What is the return rate by category?"),
    (45, QuestionCategory::CategoryPerformance, "Which category performs best during weekends?"),
    (46, QuestionCategory::CategoryPerformance, "What is the profit margin by category?"),
    (47, QuestionCategory::CategoryPerformance, "Which category has the highest customer lifetime value?"),
    (48, QuestionCategory::CategoryPerformance, "Which age group spends the most on Food?"),
    (49, QuestionCategory::CategoryPerformance, "Which age group spends the most on Electronics?"),
    (50, QuestionCategory::CategoryPerformance, "How does Fashion revenue compare across regions?"),
    (51, QuestionCategory::CategoryPerformance, "What is the average basket size per category?"),
    (52, QuestionCategory::CategoryPerformance, "Which category has the lowest cart abandonment?"),
    (53, QuestionCategory::CategoryPerformance, "How does category preference vary by device?"),
    (54, QuestionCategory::CategoryPerformance, "Which category generates the most UPI transactions?"),
    (55, QuestionCategory::CategoryPerformance, "What is the seasonal demand pattern for Travel?"),
    (56, QuestionCategory::CategoryPerformance, "Which category has the highest discount utilization?"),
    (57, QuestionCategory::CategoryPerformance, "What is the cross-sell rate between Food and Grocery?"),
    (58, QuestionCategory::CategoryPerformance, "Which category has the most new customer acquisitions?"),
    (59, QuestionCategory::CategoryPerformance, "How does Entertainment revenue trend monthly?"),
    (60, QuestionCategory::CategoryPerformance, "Which category has the best review ratings?"),
    (61, QuestionCategory::CategoryPerformance, "What is the average delivery time by category?"),

    // Time Trends
    (62, QuestionCategory::TimeTrends, "What hour has the peak transaction volume?"),
    (63, QuestionCategory::TimeTrends, "Which day of the week has the highest revenue?"),
    (64, QuestionCategory::TimeTrends, "How does transaction volume change month over month?"),
    (65, QuestionCategory::TimeTrends, "Is there a seasonal pattern in overall spending?"),
    (66, QuestionCategory::TimeTrends, "Which month has the highest average order value?"),
    (67, QuestionCategory::TimeTrends, "What is the year-over-year growth rate?"),
    (68, QuestionCategory::TimeTrends, "How does late-night transaction volume compare to daytime?"),
    (69, QuestionCategory::TimeTrends, "Which quarter has the highest fraud rate?"),
    (70, QuestionCategory::TimeTrends, "Is weekend spending higher than weekday spending?"),
    (71, QuestionCategory::TimeTrends, "What is the average time between repeat purchases?"),
    (72, QuestionCategory::TimeTrends, "Which festival period sees the highest spike?"),
    (73, QuestionCategory::TimeTrends, "How does new user acquisition trend over time?"),
    (74, QuestionCategory::TimeTrends, "What is the hourly revenue distribution?"),
    (75, QuestionCategory::TimeTrends, "Which time slot has the highest failure rate?"),
    (76, QuestionCategory::TimeTrends, "How does order frequency change after first purchase?"),
    (77, QuestionCategory::TimeTrends, "What is the weekly active user trend?"),
    (78, QuestionCategory::TimeTrends, "At what time do refund requests peak?"),
    (79, QuestionCategory::TimeTrends, "How does payment method preference change over time?"),
    (80, QuestionCategory::TimeTrends, "What is the daily transaction count trend for the last 30 days?"),
    (81, QuestionCategory::TimeTrends, "Which month shows the highest customer churn?"),
    (82, QuestionCategory::TimeTrends, "How does transaction speed vary by time of day?"),
    (83, QuestionCategory::TimeTrends, "What is the trend of average transaction value over 12 months?"),

    // Demographics
    (84, QuestionCategory::Demographics, "Which age group has the highest transaction count?"),
    (85, QuestionCategory::Demographics, "What is the spending pattern of users aged 18-25?"),
    (86, QuestionCategory::Demographics, "Which age group prefers UPI payments?"),
    (87, QuestionCategory::Demographics, "How does average order value differ by age group?"),
    (88, QuestionCategory::Demographics, "Which age group has the highest customer retention?"),
    (89, QuestionCategory::Demographics, "What is the preferred device for users aged 46-55?"),
    (90, QuestionCategory::Demographics, "Which age group shops most during late night hours?"),
    (91, QuestionCategory::Demographics, "How does fraud vulnerability change with age?"),
    (92, QuestionCategory::Demographics, "What category do users aged 36-45 prefer most?"),
    (93, QuestionCategory::Demographics, "Which age group has the highest refund rate?"),
    (94, QuestionCategory::Demographics, "What is the average session duration by age group?"),
    (95, QuestionCategory::Demographics, "How does coupon usage vary by age?"),
    (96, QuestionCategory::Demographics, "Which age group has the highest brand loyalty?"),
    (97, QuestionCategory::Demographics, "What is the preferred payment method for 56+ users?"),
    (98, QuestionCategory::Demographics, "Which age group generates the most revenue per user?"),
    (99, QuestionCategory::Demographics, "How does customer acquisition cost vary by age?"),

    // Geographic Insights
    (100, QuestionCategory::GeographicInsights, "Which region has the highest transaction volume?"),
    (101, QuestionCategory::GeographicInsights, "What is the average order value by state?"),
    (102, QuestionCategory::GeographicInsights, "Which city has the fastest growing user base?"),
    (103, QuestionCategory::GeographicInsights, "How does fraud rate compare across top 5 regions?"),
    (104, QuestionCategory::GeographicInsights, "Which region prefers mobile payments the most?"),
    (105, QuestionCategory::GeographicInsights, "What is the revenue distribution across India?"),
    (106, QuestionCategory::GeographicInsights, "Which region has the highest Electronics spending?"),
    (107, QuestionCategory::GeographicInsights, "How does delivery time vary by region?"),
    (108, QuestionCategory::GeographicInsights, "Which metro city contributes most to revenue?"),
    (109, QuestionCategory::GeographicInsights, "What is the regional distribution of new users?"),
    (110, QuestionCategory::GeographicInsights, "Which state has the highest cash-on-delivery rate?"),
    (111, QuestionCategory::GeographicInsights, "How does category preference vary by region?"),

    // Revenue Metrics
    (112, QuestionCategory::RevenueMetrics, "What is the total revenue for the current quarter?"),
    (113, QuestionCategory::RevenueMetrics, "What is the average revenue per user (ARPU)?"),
    (114, QuestionCategory::RevenueMetrics, "How does revenue per transaction trend monthly?"),
    (115, QuestionCategory::RevenueMetrics, "What is the revenue split by payment method?"),
    (116, QuestionCategory::RevenueMetrics, "Which category contributes most to gross margin?"),
    (117, QuestionCategory::RevenueMetrics, "What is the projected revenue for next quarter?"),
    (118, QuestionCategory::RevenueMetrics, "How does refund volume impact net revenue?"),
    (119, QuestionCategory::RevenueMetrics, "What is the lifetime value of top 10% customers?"),
    (120, QuestionCategory::RevenueMetrics, "How does discount depth affect revenue?"),
    (121, QuestionCategory::RevenueMetrics, "What is the revenue growth rate by category?"),
    (122, QuestionCategory::RevenueMetrics, "Which channel drives the highest revenue per session?"),
    (123, QuestionCategory::RevenueMetrics, "What is the revenue impact of fraud losses?"),
];
