use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};

use crate::modules::helpers::format::format_speed;
use crate::modules::helpers::handelbars::params::{check_param_count, f64_param};

/// # speed formatting helper
/// a formatter to display a speed in km/h with two decimals
///
/// ### usage
/// ```handlebars
/// {{formatSpeed 9.825714}}
/// {{formatSpeed 0}}
/// ```
///
/// ### output
/// ```text
/// 9.83 km/h
/// 0 km/h
/// ```
#[derive(Clone, Copy)]
pub struct FormatSpeedHelper;

impl HelperDef for FormatSpeedHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;
        let speed = f64_param(helper, 0)?;

        out.write(&format_speed(speed))?;

        Ok(())
    }
}
