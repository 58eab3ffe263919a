use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};

use crate::modules::helpers::format::format_time;
use crate::modules::helpers::handelbars::params::{check_param_count, i64_param};

/// # time formatting helper
/// displays an amount of minutes as hours and minutes
///
/// ### usage
/// ```handlebars
/// {{formatTime 105}}
/// ```
///
/// ### output
/// ```text
/// 1h 45m
/// ```
#[derive(Clone, Copy)]
pub struct FormatTimeHelper;

impl HelperDef for FormatTimeHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;
        let minutes = i64_param(helper, 0)?;

        out.write(&format_time(minutes))?;

        Ok(())
    }
}
