//! 枚举字段（choices）
//!
//! 每个枚举都是封闭的类型，数据库中存储为 SMALLINT 代码，
//! 显示时使用原始中文标签。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::CrmError;

/// 定义枚举字段的宏
///
/// 自动生成：
/// - enum 定义（serde 使用 snake_case 名称）
/// - code() / label() - 数据库代码与显示标签
/// - all() / choices() - 全部取值，供表单渲染
/// - TryFrom<i16> - 未知代码返回 InvalidChoice
/// - Display（标签）与 FromStr（snake_case 名称）
macro_rules! define_choices {
    ($(
        $(#[$meta:meta])*
        $name:ident, $export:literal {
            $($variant:ident = ($code:literal, $label:literal)),* $(,)?
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
            #[serde(rename_all = "snake_case")]
            #[ts(export, export_to = $export)]
            pub enum $name {
                $($variant,)*
            }

            impl $name {
                /// 数据库中存储的代码
                pub fn code(self) -> i16 {
                    match self {
                        $($name::$variant => $code,)*
                    }
                }

                /// 显示标签
                pub fn label(self) -> &'static str {
                    match self {
                        $($name::$variant => $label,)*
                    }
                }

                pub fn all() -> &'static [$name] {
                    &[$($name::$variant,)*]
                }

                /// (代码, 标签) 列表
                pub fn choices() -> Vec<(i16, &'static str)> {
                    Self::all().iter().map(|c| (c.code(), c.label())).collect()
                }
            }

            impl TryFrom<i16> for $name {
                type Error = CrmError;

                fn try_from(code: i16) -> Result<Self, Self::Error> {
                    match code {
                        $($code => Ok($name::$variant),)*
                        _ => Err(CrmError::invalid_choice(format!(
                            "{} 不接受代码 {code}",
                            stringify!($name)
                        ))),
                    }
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.label())
                }
            }

            impl std::str::FromStr for $name {
                type Err = CrmError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    serde_json::from_value(serde_json::Value::String(s.to_string())).map_err(|_| {
                        CrmError::invalid_choice(format!("Invalid {}: {s}", stringify!($name)))
                    })
                }
            }
        )*
    };
}

define_choices! {
    /// 客户来源渠道
    Source, "crm/choices.ts" {
        Referral = (0, "转介绍"),
        QqGroup = (1, "QQ群"),
        OfficialSite = (2, "官网"),
        BaiduAd = (3, "百度推广"),
        Forum51Cto = (4, "51CTO"),
        Zhihu = (5, "知乎"),
        Market = (6, "市场"),
    }

    /// 客户报名状态
    CustomerStatus, "crm/choices.ts" {
        Enrolled = (0, "已报名"),
        NotEnrolled = (1, "未报名"),
    }

    /// 跟进时的报名意向
    Intention, "crm/choices.ts" {
        WithinTwoWeeks = (0, "2周内报名"),
        WithinOneMonth = (1, "1个月内报名"),
        NoRecentPlan = (2, "近期无报名计划"),
        EnrolledElsewhere = (3, "已在其它机构报名"),
        Enrolled = (4, "已报名"),
        Blacklisted = (5, "已拉黑"),
    }

    /// 上课类型（标签保持原样，包括缺失的右括号）
    ClassType, "crm/choices.ts" {
        InPersonFullTime = (0, "面授(脱产)"),
        InPersonWeekend = (1, "面授(周末"),
        Online = (2, "网络班"),
    }

    /// 出勤记录
    Attendance, "crm/choices.ts" {
        CheckedIn = (0, "已签到"),
        Late = (1, "迟到"),
        Absent = (2, "缺勤"),
        LeftEarly = (3, "早退"),
    }

    /// 成绩档位，负分表示差或抄袭，0 表示不适用
    Score, "crm/choices.ts" {
        APlus = (100, "A+"),
        A = (90, "A"),
        BPlus = (85, "B+"),
        B = (80, "B"),
        BMinus = (75, "B-"),
        CPlus = (70, "C+"),
        C = (60, "C"),
        CMinus = (40, "C-"),
        D = (-50, "D"),
        Copy = (-100, "COPY"),
        NotApplicable = (0, "N/A"),
    }
}

impl Default for CustomerStatus {
    fn default() -> Self {
        CustomerStatus::NotEnrolled
    }
}

impl Default for Attendance {
    fn default() -> Self {
        Attendance::CheckedIn
    }
}

impl Default for Score {
    fn default() -> Self {
        Score::NotApplicable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_accepts_only_listed_codes() {
        let accepted = [100, 90, 85, 80, 75, 70, 60, 40, -50, -100, 0];
        for code in accepted {
            let score = Score::try_from(code).expect("listed score code");
            assert_eq!(score.code(), code);
        }
        assert_eq!(Score::all().len(), 11);

        for code in [55, 1, -1, 95, 101, -99] {
            let err = Score::try_from(code).unwrap_err();
            assert_eq!(err.code(), "E007");
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(CustomerStatus::default().code(), 1);
        assert_eq!(Attendance::default().code(), 0);
        assert_eq!(Score::default().code(), 0);
        assert_eq!(Score::default().label(), "N/A");
    }

    #[test]
    fn test_labels_are_preserved() {
        assert_eq!(ClassType::InPersonWeekend.label(), "面授(周末");
        assert_eq!(ClassType::InPersonFullTime.to_string(), "面授(脱产)");
        assert_eq!(Source::Forum51Cto.label(), "51CTO");
        assert_eq!(Intention::Blacklisted.label(), "已拉黑");
    }

    #[test]
    fn test_choices_listing() {
        assert_eq!(
            CustomerStatus::choices(),
            vec![(0, "已报名"), (1, "未报名")]
        );
        assert_eq!(Intention::choices().len(), 6);
        assert_eq!(Source::choices().first(), Some(&(0, "转介绍")));
    }

    #[test]
    fn test_from_str_uses_snake_case_names() {
        assert_eq!("qq_group".parse::<Source>(), Ok(Source::QqGroup));
        assert_eq!("left_early".parse::<Attendance>(), Ok(Attendance::LeftEarly));
        assert!("weekend".parse::<ClassType>().is_err());
    }

    #[test]
    fn test_unknown_codes_are_rejected() {
        assert!(Source::try_from(7).is_err());
        assert!(CustomerStatus::try_from(2).is_err());
        assert!(Attendance::try_from(-1).is_err());
    }
}
