use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};

use crate::modules::helpers::format::format_number;
use crate::modules::helpers::handelbars::params::{check_param_count, f64_param, i64_param};

/// # number formatting helper
/// prints a number with a fixed amount of decimals
///
/// ### usage
/// ```handlebars
/// {{formatNumber 17.195 2}}
/// ```
#[derive(Clone, Copy)]
pub struct FormatNumberHelper;

impl HelperDef for FormatNumberHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 2)?;
        let value = f64_param(helper, 0)?;
        let decimals = i64_param(helper, 1)?.clamp(0, 10) as usize;

        out.write(&format_number(value, decimals))?;

        Ok(())
    }
}
