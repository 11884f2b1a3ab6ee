//! Simplified Chinese string table (partial; untranslated keys fall back
//! to English).

pub static TABLE: &[(&str, &str)] = &[
    ("appOverview.analysis.title", "分析"),
    ("appOverview.overview.appInfo.accessibleAddress", "公开访问 URL"),
    ("appOverview.overview.appInfo.explanation", "开箱即用的 AI WebApp"),
    ("appOverview.overview.appInfo.preview", "预览"),
    ("appOverview.overview.status.disable", "已停用"),
    ("appOverview.overview.status.running", "运行中"),
    ("appOverview.overview.title", "概览"),
    ("common.operation.cancel", "取消"),
    ("common.operation.confirm", "确认"),
    ("common.operation.copied", "已复制"),
    ("common.operation.copy", "复制"),
    ("common.operation.create", "创建"),
    ("common.operation.delete", "删除"),
    ("common.operation.edit", "编辑"),
    ("common.operation.ok", "好的"),
    ("common.operation.remove", "移除"),
    ("common.operation.save", "保存"),
    ("common.operation.settings", "设置"),
];
