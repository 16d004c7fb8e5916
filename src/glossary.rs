//! Keyword annotation for answer text.
//!
//! The glossary is a static ordered term→note table. Annotation is
//! deliberately minimal: the first glossary entry (in table order, not
//! earliest-in-text order) that occurs anywhere in the answer gets its
//! first occurrence wrapped with an inline note; everything else is left
//! alone. At most one annotation per answer.

#[cfg(test)]
#[path = "glossary_test.rs"]
mod glossary_test;

/// Ordered glossary of civil-aviation statistics terms. Order is
/// load-bearing: the scan stops at the first entry present in the text.
/// Notes may carry inline HTML.
pub const GLOSSARY: &[(&str, &str)] = &[
    (
        "运输总周转量",
        "按旅客、货物、邮件的重量与运输距离计算的<b>综合运输工作量</b>，单位为吨公里",
    ),
    (
        "旅客运输量",
        "民航运输航班实际运送的<b>旅客人次</b>，同一旅客每乘坐一个航段计一人次",
    ),
    (
        "货邮运输量",
        "民航运输航班实际载运的<b>货物与邮件重量</b>，单位为吨",
    ),
    (
        "正班客座率",
        "正班航班旅客周转量占可用座位公里的比例，反映<b>座位利用水平</b>",
    ),
    (
        "正班载运率",
        "正班航班总周转量占可提供吨公里的比例，反映<b>运力利用水平</b>",
    ),
    (
        "通用航空",
        "除公共航空运输以外的民用航空活动，如作业飞行、训练飞行",
    ),
];

/// Wrap the first occurrence of the first matching glossary term in a
/// keyword span carrying its note. Returns the text unchanged when no
/// term is present.
pub fn annotate(text: &str) -> String {
    for (term, note) in GLOSSARY {
        if let Some(at) = text.find(term) {
            let after = at + term.len();
            return format!(
                "{}<span class=\"keyword\">{}<span class=\"keyword-note\">{}</span></span>{}",
                &text[..at],
                term,
                note,
                &text[after..],
            );
        }
    }
    text.to_owned()
}
