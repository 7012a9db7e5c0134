//! 商品字段校验
//!
//! 每个字段的规则集中在 [`PRODUCT_SCHEMA`] 中，创建和局部更新共用同一个
//! 校验过程：创建时检查全部规则，局部更新只检查请求中出现的字段。
//! 所有违规一次性收集返回。

use serde_json::{Map, Value};

use super::model::ProductFields;

/// 大于此值的整数无法用 f64 精确表示
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Patch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Category,
    Description,
    Price,
    Stock,
    Rating,
    ImageUrl,
}

impl Field {
    /// 请求 JSON 中的键名
    pub fn key(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Category => "category",
            Field::Description => "description",
            Field::Price => "price",
            Field::Stock => "stock",
            Field::Rating => "rating",
            Field::ImageUrl => "imageUrl",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Text { non_empty: bool },
    Number { min: f64, max: Option<f64>, integer: bool },
}

/// 值不符合规则时的处理方式
#[derive(Debug, Clone, Copy)]
enum OnReject {
    /// 报告错误信息
    Report(&'static str),
    /// 创建时数值无法解析则按未提供处理（取默认值），其余情况报告
    DefaultOnCreate(&'static str),
    /// 忽略该字段
    Ignore,
}

impl OnReject {
    fn message(self) -> Option<&'static str> {
        match self {
            OnReject::Report(msg) | OnReject::DefaultOnCreate(msg) => Some(msg),
            OnReject::Ignore => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    field: Field,
    kind: Kind,
    /// 创建时必须提供
    required: bool,
    on_reject: OnReject,
}

const PRODUCT_SCHEMA: [Rule; 7] = [
    Rule {
        field: Field::Title,
        kind: Kind::Text { non_empty: true },
        required: true,
        on_reject: OnReject::Report("title is required (string)"),
    },
    Rule {
        field: Field::Category,
        kind: Kind::Text { non_empty: true },
        required: false,
        on_reject: OnReject::Report("category must be a non-empty string"),
    },
    Rule {
        field: Field::Description,
        kind: Kind::Text { non_empty: false },
        required: false,
        on_reject: OnReject::Report("description must be a string"),
    },
    Rule {
        field: Field::Price,
        kind: Kind::Number {
            min: 0.0,
            max: None,
            integer: false,
        },
        required: true,
        on_reject: OnReject::Report("price must be a non-negative number"),
    },
    Rule {
        field: Field::Stock,
        kind: Kind::Number {
            min: 0.0,
            max: Some(MAX_EXACT_INTEGER),
            integer: true,
        },
        required: false,
        on_reject: OnReject::DefaultOnCreate("stock must be a non-negative integer"),
    },
    Rule {
        field: Field::Rating,
        kind: Kind::Number {
            min: 0.0,
            max: Some(5.0),
            integer: false,
        },
        required: false,
        on_reject: OnReject::Report("rating must be a number between 0 and 5"),
    },
    // 非字符串的图片地址不报错：创建时取默认值，更新时保持原值
    Rule {
        field: Field::ImageUrl,
        kind: Kind::Text { non_empty: false },
        required: false,
        on_reject: OnReject::Ignore,
    },
];

#[derive(Debug, Clone, PartialEq)]
enum Coerced {
    Text(String),
    Number(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    /// 不是数字，也不是可解析为数字的字符串
    Unparseable,
    /// 类型或取值范围不符
    Invalid,
}

impl Kind {
    fn coerce(self, value: &Value) -> Result<Coerced, Rejection> {
        match self {
            Kind::Text { non_empty } => {
                let text = value.as_str().ok_or(Rejection::Invalid)?.trim();
                if non_empty && text.is_empty() {
                    return Err(Rejection::Invalid);
                }
                Ok(Coerced::Text(text.to_string()))
            }
            Kind::Number { min, max, integer } => {
                let number = coerce_number(value).ok_or(Rejection::Unparseable)?;
                if number < min || max.is_some_and(|max| number > max) {
                    return Err(Rejection::Invalid);
                }
                if integer && number.fract() != 0.0 {
                    return Err(Rejection::Invalid);
                }
                Ok(Coerced::Number(number))
            }
        }
    }
}

/// JSON 数字直接取值，字符串去空白后按十进制解析；结果必须有限
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

impl ProductFields {
    fn set(&mut self, field: Field, value: Coerced) {
        // 字段与类型在 PRODUCT_SCHEMA 中一一对应
        match (field, value) {
            (Field::Title, Coerced::Text(v)) => self.title = Some(v),
            (Field::Category, Coerced::Text(v)) => self.category = Some(v),
            (Field::Description, Coerced::Text(v)) => self.description = Some(v),
            (Field::ImageUrl, Coerced::Text(v)) => self.image_url = Some(v),
            (Field::Price, Coerced::Number(v)) => self.price = Some(v),
            (Field::Stock, Coerced::Number(v)) => self.stock = Some(v as u64),
            (Field::Rating, Coerced::Number(v)) => self.rating = Some(v),
            (field, value) => unreachable!("{field:?} 与值 {value:?} 类型不匹配"),
        }
    }
}

/// 按模式校验请求体，返回转换后的字段或全部错误信息
///
/// 出现的键即视为已提供，包括 `null`；未知键忽略。
pub fn validate_product(
    body: &Map<String, Value>,
    mode: Mode,
) -> Result<ProductFields, Vec<String>> {
    let mut fields = ProductFields::default();
    let mut errors = Vec::new();

    for rule in PRODUCT_SCHEMA.iter() {
        let Some(value) = body.get(rule.field.key()) else {
            if mode == Mode::Create && rule.required {
                errors.extend(rule.on_reject.message().map(str::to_string));
            }
            continue;
        };

        match (rule.kind.coerce(value), rule.on_reject) {
            (Ok(coerced), _) => fields.set(rule.field, coerced),
            (Err(_), OnReject::Ignore) => {}
            (Err(Rejection::Unparseable), OnReject::DefaultOnCreate(_)) if mode == Mode::Create => {}
            (Err(_), on_reject) => errors.extend(on_reject.message().map(str::to_string)),
        }
    }

    if errors.is_empty() {
        Ok(fields)
    } else {
        Err(errors)
    }
}
