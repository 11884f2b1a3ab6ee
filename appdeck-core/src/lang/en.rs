//! English string table (complete; the fallback locale).

pub static TABLE: &[(&str, &str)] = &[
    (
        "appOverview.analysis.activeUsers.explanation",
        "Unique users engaging in Q&A with AI; prompt engineering/debugging excluded.",
    ),
    ("appOverview.analysis.activeUsers.title", "Active Users"),
    (
        "appOverview.analysis.avgResponseTime.explanation",
        "Time (ms) for AI to process/respond; for text-based apps.",
    ),
    (
        "appOverview.analysis.avgResponseTime.title",
        "Avg. Response Time",
    ),
    (
        "appOverview.analysis.avgSessionInteractions.explanation",
        "Continuous user-AI communication count; for conversation-based apps.",
    ),
    (
        "appOverview.analysis.avgSessionInteractions.title",
        "Avg. Session Interactions",
    ),
    ("appOverview.analysis.ms", "ms"),
    ("appOverview.analysis.title", "Analysis"),
    ("appOverview.analysis.tokenPS", "Token/s"),
    ("appOverview.analysis.tokenUsage.consumed", "Consumed"),
    (
        "appOverview.analysis.tokenUsage.explanation",
        "Reflects the daily token usage of the language model for the application, useful for cost control purposes.",
    ),
    ("appOverview.analysis.tokenUsage.title", "Token Usage"),
    (
        "appOverview.analysis.totalMessages.explanation",
        "Daily AI interactions count; prompt engineering/debugging excluded.",
    ),
    ("appOverview.analysis.totalMessages.title", "Total Messages"),
    (
        "appOverview.analysis.tps.explanation",
        "Measure the performance of the LLM. Count the Tokens output speed of LLM from the beginning of the request to the completion of the output.",
    ),
    ("appOverview.analysis.tps.title", "Token Output Speed"),
    (
        "appOverview.analysis.userSatisfactionRate.explanation",
        "The number of likes per 1,000 messages. This indicates the proportion of answers that users are highly satisfied with.",
    ),
    (
        "appOverview.analysis.userSatisfactionRate.title",
        "User Satisfaction Rate",
    ),
    ("appOverview.apiKeyInfo.callTimes", "Call times"),
    (
        "appOverview.apiKeyInfo.cloud.exhausted.description",
        "Your trial quota has been exhausted. Please set up your own model provider or purchase additional quota.",
    ),
    (
        "appOverview.apiKeyInfo.cloud.exhausted.title",
        "Your trial quota have been used up, please set up your APIKey.",
    ),
    (
        "appOverview.apiKeyInfo.cloud.trial.description",
        "The trial quota is provided for your testing use. Before the trial quota calls are exhausted, please set up your own model provider or purchase additional quota.",
    ),
    (
        "appOverview.apiKeyInfo.cloud.trial.title",
        "You are using the {{providerName}} trial quota.",
    ),
    ("appOverview.apiKeyInfo.selfHost.title.row1", "To get started,"),
    (
        "appOverview.apiKeyInfo.selfHost.title.row2",
        "setup your model provider first.",
    ),
    (
        "appOverview.apiKeyInfo.setAPIBtn",
        "Go to setup model provider",
    ),
    (
        "appOverview.apiKeyInfo.tryCloud",
        "Or try the cloud version with free quota",
    ),
    (
        "appOverview.overview.apiInfo.accessibleAddress",
        "API Token",
    ),
    ("appOverview.overview.apiInfo.doc", "API Reference"),
    (
        "appOverview.overview.apiInfo.explanation",
        "Easily integrated into your application",
    ),
    ("appOverview.overview.apiInfo.title", "Backend service API"),
    (
        "appOverview.overview.appInfo.accessibleAddress",
        "Public URL",
    ),
    (
        "appOverview.overview.appInfo.customize.entry",
        "Want to customize your WebApp?",
    ),
    (
        "appOverview.overview.appInfo.customize.explanation",
        "You can customize the frontend of the Web App to fit your scenario and style needs.",
    ),
    (
        "appOverview.overview.appInfo.customize.title",
        "Customize AI WebApp",
    ),
    ("appOverview.overview.appInfo.customize.way", "way"),
    (
        "appOverview.overview.appInfo.customize.way1.name",
        "Fork the client code, modify it and deploy to Vercel (recommended)",
    ),
    (
        "appOverview.overview.appInfo.customize.way1.step1",
        "Fork the client code and modify it",
    ),
    (
        "appOverview.overview.appInfo.customize.way1.step1Operation",
        "WebClient",
    ),
    (
        "appOverview.overview.appInfo.customize.way1.step1Tip",
        "Click here to fork the source code into your GitHub account and modify the code",
    ),
    (
        "appOverview.overview.appInfo.customize.way1.step2",
        "Configure the Web",
    ),
    (
        "appOverview.overview.appInfo.customize.way1.step2Tip",
        "Copy the Web API and APP ID, then paste them into the client code config/index.ts",
    ),
    (
        "appOverview.overview.appInfo.customize.way1.step3",
        "Deploy to Vercel",
    ),
    (
        "appOverview.overview.appInfo.customize.way1.step3Operation",
        "Import repository",
    ),
    (
        "appOverview.overview.appInfo.customize.way1.step3Tip",
        "Click here to import the repository into Vercel and deploy",
    ),
    (
        "appOverview.overview.appInfo.customize.way2.name",
        "Write client-side code to call the API and deploy it to a server",
    ),
    (
        "appOverview.overview.appInfo.customize.way2.operation",
        "Documentation",
    ),
    ("appOverview.overview.appInfo.embedded.copied", "Copied"),
    ("appOverview.overview.appInfo.embedded.copy", "Copy"),
    ("appOverview.overview.appInfo.embedded.entry", "Embedded"),
    (
        "appOverview.overview.appInfo.embedded.explanation",
        "Choose the way to embed chat app to your website",
    ),
    (
        "appOverview.overview.appInfo.embedded.iframe",
        "To add the chat app any where on your website, add this iframe to your html code.",
    ),
    (
        "appOverview.overview.appInfo.embedded.scripts",
        "To add a chat app to the bottom right of your website add this code to your html.",
    ),
    (
        "appOverview.overview.appInfo.embedded.title",
        "Embed on website",
    ),
    (
        "appOverview.overview.appInfo.explanation",
        "Ready-to-use AI WebApp",
    ),
    (
        "appOverview.overview.appInfo.preUseReminder",
        "Please enable WebApp before continuing.",
    ),
    ("appOverview.overview.appInfo.preview", "Preview"),
    ("appOverview.overview.appInfo.settings.entry", "Settings"),
    ("appOverview.overview.appInfo.settings.language", "Language"),
    (
        "appOverview.overview.appInfo.settings.more.copyRightPlaceholder",
        "Enter the name of the author or organization",
    ),
    (
        "appOverview.overview.appInfo.settings.more.copyright",
        "Copyright",
    ),
    (
        "appOverview.overview.appInfo.settings.more.entry",
        "Show more settings",
    ),
    (
        "appOverview.overview.appInfo.settings.more.privacyPolicy",
        "Privacy Policy",
    ),
    (
        "appOverview.overview.appInfo.settings.more.privacyPolicyPlaceholder",
        "Enter the privacy policy",
    ),
    (
        "appOverview.overview.appInfo.settings.more.privacyPolicyTip",
        "Helps visitors understand the data the application collects, see the <privacyPolicyLink>Privacy Policy</privacyPolicyLink>.",
    ),
    (
        "appOverview.overview.appInfo.settings.title",
        "WebApp Settings",
    ),
    (
        "appOverview.overview.appInfo.settings.webDesc",
        "WebApp Description",
    ),
    (
        "appOverview.overview.appInfo.settings.webDescPlaceholder",
        "Enter the description of the WebApp",
    ),
    (
        "appOverview.overview.appInfo.settings.webDescTip",
        "This text will be displayed on the client side, providing basic guidance on how to use the application",
    ),
    ("appOverview.overview.appInfo.settings.webName", "WebApp Name"),
    ("appOverview.overview.appInfo.share.copyLink", "Copy Link"),
    ("appOverview.overview.appInfo.share.entry", "Share"),
    (
        "appOverview.overview.appInfo.share.explanation",
        "Share the following URL to invite more people to access the application.",
    ),
    ("appOverview.overview.appInfo.share.linkCopied", "Copied"),
    ("appOverview.overview.appInfo.share.regenerate", "Regenerate"),
    ("appOverview.overview.appInfo.share.shareUrl", "Share URL"),
    ("appOverview.overview.status.disable", "Disable"),
    ("appOverview.overview.status.running", "In service"),
    ("appOverview.overview.title", "Overview"),
    ("appOverview.welcome.enterKeyTip", "enter your OpenAI API Key below"),
    ("appOverview.welcome.firstStepTip", "To get started,"),
    (
        "appOverview.welcome.getKeyTip",
        "Get your API Key from OpenAI dashboard",
    ),
    (
        "appOverview.welcome.placeholder",
        "Your OpenAI API Key(eg.sk-xxxx)",
    ),
    ("common.operation.cancel", "Cancel"),
    ("common.operation.confirm", "Confirm"),
    ("common.operation.copied", "Copied"),
    ("common.operation.copy", "Copy"),
    ("common.operation.create", "Create"),
    ("common.operation.delete", "Delete"),
    ("common.operation.edit", "Edit"),
    ("common.operation.ok", "OK"),
    ("common.operation.remove", "Remove"),
    ("common.operation.save", "Save"),
    ("common.operation.settings", "Settings"),
];
