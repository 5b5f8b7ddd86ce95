//! 模板变量替换
//!
//! 两遍顺序替换：先 `${NAME}`，后裸 `$NAME`。
//! 第二遍扫描的是第一遍的结果，所以替换出来的值里如果含有 `$NAME`
//! 形状的片段会被再次替换。这是刻意保留的顺序依赖行为，下游配置
//! 可能依赖它；见单元测试 `test_double_substitution_sharp_edge`。

use crate::types::EnvMap;
use regex::{Captures, Regex};

/// 替换文本中的变量引用
///
/// - `${NAME}`：NAME 为一个或多个非 `}` 字符
/// - `$NAME`：NAME 匹配 `[A-Za-z_][A-Za-z0-9_]*`
///
/// 未解析的引用原样保留，替换本身永不报错。
pub fn substitute(content: &str, env: &EnvMap) -> String {
    // 匹配 ${NAME}
    let braced = Regex::new(r"\$\{([^}]+)\}").unwrap();
    // 匹配裸 $NAME
    let bare = Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").unwrap();

    // 第一遍：${NAME}
    let pass1 = braced.replace_all(content, |caps: &Captures| resolve(env, caps));
    // 第二遍：在第一遍的结果上替换 $NAME
    let pass2 = bare.replace_all(&pass1, |caps: &Captures| resolve(env, caps));

    pass2.into_owned()
}

/// 查找变量值，未找到时回退到原始匹配文本
fn resolve(env: &EnvMap, caps: &Captures) -> String {
    match env.get(&caps[1]) {
        Some(value) => value.to_string(),
        None => caps[0].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(pairs: &[(&str, &str)]) -> EnvMap {
        let mut env = EnvMap::new();
        for (key, value) in pairs {
            env.set(*key, *value);
        }
        env
    }

    #[test]
    fn test_braced_substitution() {
        let env = env_with(&[("FOO", "bar"), ("BAZ", "qux")]);
        assert_eq!(substitute("url: ${FOO}/${BAZ}", &env), "url: bar/qux");
    }

    #[test]
    fn test_bare_substitution() {
        let env = env_with(&[("HOME_DIR", "/home/amd")]);
        assert_eq!(substitute("path: $HOME_DIR/cache", &env), "path: /home/amd/cache");
    }

    #[test]
    fn test_unresolved_braced_kept() {
        let env = EnvMap::new();
        assert_eq!(substitute("token: ${MISSING}", &env), "token: ${MISSING}");
    }

    #[test]
    fn test_unresolved_bare_kept() {
        let env = EnvMap::new();
        assert_eq!(substitute("token: $MISSING", &env), "token: $MISSING");
    }

    #[test]
    fn test_non_token_text_untouched() {
        let env = env_with(&[("A", "1")]);
        let content = "plain: text\nprice: 10$\nlist:\n  - ${A}\n";
        assert_eq!(
            substitute(content, &env),
            "plain: text\nprice: 10$\nlist:\n  - 1\n"
        );
    }

    #[test]
    fn test_braced_name_not_identifier_syntax() {
        // ${...} 里的 NAME 只要求非 }，裸 $NAME 才要求标识符
        let env = env_with(&[("MY-VAR", "dash")]);
        assert_eq!(substitute("v: ${MY-VAR}", &env), "v: dash");
    }

    #[test]
    fn test_double_substitution_sharp_edge() {
        // 第一遍替换出的值含有 $INNER，第二遍会再替换一次
        let env = env_with(&[("OUTER", "see $INNER"), ("INNER", "deep")]);
        assert_eq!(substitute("x: ${OUTER}", &env), "x: see deep");
    }

    #[test]
    fn test_unresolved_braced_survives_bare_pass() {
        // 第一遍留下的 ${MISSING} 不会被第二遍的 $NAME 规则破坏
        let env = env_with(&[("SET", "ok")]);
        assert_eq!(
            substitute("${MISSING} and $SET", &env),
            "${MISSING} and ok"
        );
    }

    #[test]
    fn test_idempotent_on_fully_resolved() {
        let env = env_with(&[("FOO", "bar")]);
        let once = substitute("url: ${FOO}/static", &env);
        assert_eq!(once, "url: bar/static");
        // 完全解析后的文本不含 $ 引用，再跑一遍不变
        assert_eq!(substitute(&once, &env), once);
    }

    #[test]
    fn test_empty_braces_left_alone() {
        let env = EnvMap::new();
        assert_eq!(substitute("v: ${}", &env), "v: ${}");
    }

    #[test]
    fn test_value_with_dollar_literal() {
        // 值里的 $ 后面不是标识符时不会触发第二遍
        let env = env_with(&[("PRICE", "100$")]);
        assert_eq!(substitute("p: ${PRICE}", &env), "p: 100$");
    }
}
