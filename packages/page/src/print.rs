/// Shown when the browser refuses to open its print dialog.
pub const PRINT_FALLBACK_ALERT: &str = "حدث خطأ في فتح نافذة الطباعة. يرجى استخدام Ctrl+P أو Cmd+P.\nError opening print dialog. Please use Ctrl+P or Cmd+P.";
