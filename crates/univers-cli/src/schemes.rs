//! Schemes command - list the registered version schemes.

use anyhow::Result;

use crate::Context;

pub fn lines(ctx: &Context) -> Vec<String> {
    let mut lines: Vec<String> = ctx.registry.names().into_iter().map(str::to_string).collect();
    lines.extend(
        ctx.registry
            .aliases()
            .map(|(alias, target)| format!("{} -> {}", alias, target)),
    );
    lines
}

pub fn execute(ctx: &Context) -> Result<i32> {
    for line in lines(ctx) {
        println!("{}", line);
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UniversConfig;

    #[test]
    fn test_lines() {
        let mut config = UniversConfig::default();
        config.aliases.insert("npm".to_string(), "semver".to_string());
        let ctx = Context::new(config).unwrap();

        assert_eq!(lines(&ctx), vec!["composer", "semver", "npm -> semver"]);
    }
}
