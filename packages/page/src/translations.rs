/// Arabic text and its English rendering, in page order.
///
/// Keys are exact, already-trimmed Arabic text.
pub static TRANSLATIONS: &[(&str, &str)] = &[
    ("مصمم بتفانٍ بواسطة", "Designed with passion by"),
    ("نحو التميز دائماً", "Towards Excellence Always"),
    ("الرئيسية", "Home"),
    ("تواصل", "Contact"),
    ("تحميل السيرة", "Download CV"),
    ("English", "العربية"),
    ("العربية", "English"),
    ("الهاتف", "Phone"),
    ("البريد الإلكتروني", "Email"),
    ("العنوان", "Location"),
    ("الشركة الحالية", "Current Company"),
    ("دبي، الإمارات العربية المتحدة", "Dubai, United Arab Emirates"),
    ("مدير مشروع إعادة هندسة الخدمات", "Service Reengineering Project Manager"),
    ("قيادة مشروع شامل لإعادة تصميم وتحسين 151 خدمة حكومية", "Leading a comprehensive project to redesign and improve 151 government services"),
    ("تطبيق منهجيات التصميم المرتكز على الإنسان (Human-Centered Design)", "Applying Human-Centered Design methodologies"),
    ("تحليل رحلة العميل وتحديد نقاط الألم وفرص التحسين", "Analyzing customer journey and identifying pain points and improvement opportunities"),
    ("تطوير نماذج أولية واختبارها مع المستخدمين", "Developing prototypes and testing them with users"),
    ("تأسيس قسم قيادة الخدمات", "Establishing Service Leadership Department"),
    ("إنشاء وتأسيس قسم متخصص لقيادة وتحسين الخدمات الحكومية", "Creating and establishing a specialized department for leading and improving government services"),
    ("تطوير استراتيجيات وسياسات إدارة الخدمات", "Developing service management strategies and policies"),
    ("بناء فريق عمل متخصص وتدريبه على أفضل الممارسات", "Building a specialized team and training it on best practices"),
    ("وضع معايير قياس جودة الخدمات ومتابعة الأداء", "Setting service quality measurement standards and performance monitoring"),
    ("تأسيس قسم الاستدامة والمسؤولية الاجتماعية", "Establishing Sustainability and Social Responsibility Department"),
    ("تأسيس قسم جديد لتعزيز الاستدامة المؤسسية", "Establishing a new department to enhance institutional sustainability"),
    ("تطوير استراتيجية الاستدامة والمسؤولية الاجتماعية للوزارة", "Developing ministry sustainability and social responsibility strategy"),
    ("تنفيذ مبادرات بيئية واجتماعية مبتكرة", "Implementing innovative environmental and social initiatives"),
    ("قياس الأثر الاجتماعي والبيئي للمشاريع والخدمات", "Measuring social and environmental impact of projects and services"),
    ("مدير مشروع مبادرة تجميع الاستدامة", "Sustainability Aggregation Initiative Project Manager"),
    ("قيادة مبادرة شاملة لتجميع وتوحيد جهود الاستدامة", "Leading a comprehensive initiative to aggregate and unify sustainability efforts"),
    ("تطوير مؤشرات أداء لقياس التقدم في الاستدامة", "Developing KPIs to measure sustainability progress"),
    ("التنسيق مع مختلف الجهات الداخلية والخارجية", "Coordinating with various internal and external entities"),
    ("إعداد تقارير دورية عن إنجازات الاستدامة", "Preparing periodic reports on sustainability achievements"),
    ("نموذج التميز الحكومي (GEM 2.1)", "Government Excellence Model (GEM 2.1)"),
    ("تطبيق معايير نموذج التميز الحكومي الإماراتي الإصدار 2.1", "Implementing UAE Government Excellence Model version 2.1 standards"),
    ("إجراء تقييم ذاتي شامل لأداء الوزارة", "Conducting comprehensive self-assessment of ministry performance"),
    ("تطوير خطط تحسين بناءً على فجوات التميز", "Developing improvement plans based on excellence gaps"),
    ("التحضير للجوائز والاعتمادات الحكومية", "Preparing for government awards and accreditations"),
    ("المهارات الأساسية والكفاءات المتخصصة", "Core Skills & Specialized Competencies"),
    ("إدارة المشاريع وتحسين الخدمات", "Project Management & Service Improvement"),
    ("الاستراتيجية ومؤشرات الأداء", "Strategy & Performance Indicators"),
    ("تجربة العميل والبحوث", "Customer Experience & Research"),
    ("إدارة المخاطر والتحسين المستمر", "Risk Management & Continuous Improvement"),
    ("التدريب والتطوير المؤسسي", "Training & Organizational Development"),
    ("التقنية والأدوات", "Technology & Tools"),
    ("مدير التعلم والتطوير الاستشاري - Ethos Integrated Solutions", "Learning & Development Consulting Manager - Ethos Integrated Solutions"),
    ("شغل منصب مدير التعلم والتطوير الاستشاري في شركة إيثوس للحلول المتكاملة", "Served as Learning & Development Consulting Manager at Ethos Integrated Solutions"),
    ("نسبة نجاح المشاريع", "Project Success Rate"),
    ("سنوات من التميز", "Years of Excellence"),
    ("مشروع استشاري منجز", "Completed Consulting Project"),
    ("مشاريع نظام التصنيف العالمي بالنجوم والتميز:", "Global Star Rating System & Excellence Projects:"),
    ("شرطة أبوظبي", "Abu Dhabi Police"),
    ("وزارة الداخلية", "Ministry of Interior"),
    ("مؤسسة الإمارات للخدمات الصحية", "Emirates Health Services"),
    ("وزارة الصحة ووقاية المجتمع", "Ministry of Health and Prevention"),
    ("شرطة دبي", "Dubai Police"),
    ("الهيئة الاتحادية للهوية والجنسية والجمارك وأمن المنافذ", "Federal Authority for Identity, Citizenship, Customs & Port Security"),
    ("الشهادات والاعتمادات المهنية", "Professional Certifications & Accreditations"),
    ("شهادات التميز المؤسسي", "Organizational Excellence Certifications"),
    ("شهادات تجربة العميل والخدمات", "Customer Experience & Services Certifications"),
    ("شهادات التدريب والتطوير", "Training & Development Certifications"),
    ("شهادات إدارة المشاريع", "Project Management Certifications"),
    ("شهادات الجودة والأيزو", "Quality & ISO Certifications"),
    ("شهادات إضافية", "Additional Certifications"),
    ("أولاً:", "First:"),
    ("ثانياً:", "Second:"),
    ("ثالثاً:", "Third:"),
    ("رابعاً:", "Fourth:"),
    ("خامساً:", "Fifth:"),
    ("سادساً:", "Sixth:"),
    ("سابعاً:", "Seventh:"),
    ("نوفمبر 2017 - نوفمبر 2022", "November 2017 - November 2022"),
    ("يوليو 2022 - نوفمبر 2024", "July 2022 - November 2024"),
    ("مكتمل", "Completed"),
    ("PDCA للاستشارات الإدارية", "PDCA Management Consultancy"),
    ("مستشار التميز المؤسسي", "Organizational Excellence Consultant"),
    ("أساتذة التميز المؤسسي الدولي", "International Organizational Excellence Professors"),
    ("مستشار التميز", "Excellence Consultant"),
    ("منسق مشاريع", "Project Coordinator"),
    ("2016 - 2017", "2016 - 2017"),
    ("2015 - 2016", "2015 - 2016"),
    ("2014 - 2015", "2014 - 2015"),
    ("تقديم استشارات متخصصة في مجالات التميز المؤسسي وإدارة الجودة للجهات الحكومية والخاصة، مع التركيز على تطبيق نماذج التميز العالمية والمحلية.", "Providing specialized consultancy in organizational excellence and quality management for government and private entities, focusing on implementing global and local excellence models."),
    ("العمل كمستشار تميز مؤسسي، مع التركيز على تطوير أنظمة إدارة الأداء وتطبيق معايير التميز في مختلف القطاعات.", "Working as an organizational excellence consultant, focusing on developing performance management systems and implementing excellence standards across various sectors."),
    ("تنسيق وإدارة المشاريع الاستشارية، مع المساهمة في تطوير المنهجيات وأدوات العمل الاستشارية.", "Coordinating and managing consulting projects, while contributing to the development of methodologies and consulting work tools."),
    ("مشروع نظام التصنيف العالمي بالنجوم للخدمات", "Global Star Rating System Project for Services"),
    ("تطبيق شامل لنظام التصنيف العالمي بالنجوم على خدمات القيادة العامة لشرطة أبوظبي، شمل تحليل وتقييم الخدمات، تطوير معايير الأداء، وتدريب الفرق على أفضل الممارسات العالمية.", "Comprehensive implementation of the Global Star Rating System for Abu Dhabi Police services, including service analysis and evaluation, performance standards development, and training teams on global best practices."),
    ("تنفيذ كامل برنامج 7 نجوم لمراكز إسعاد المتعاملين", "Complete Implementation of 7 Stars Program for Customer Happiness Centers"),
    ("قيادة التنفيذ الكامل لبرنامج 7 نجوم لمراكز إسعاد المتعاملين، يشمل جميع ركائز البرنامج من استشارات، تقييم، قياس، وتطوير.", "Leading complete implementation of 7 Stars program for customer happiness centers, including all program pillars: consultancy, evaluation, measurement, and development."),
    ("ركيزتان: الاستشارات والقياس لنظام التصنيف العالمي", "Two Pillars: Consultancy and Measurement for Global Rating System"),
    ("تقديم الاستشارات الفنية المتخصصة وإجراء القياسات الميدانية لتطبيق نظام التصنيف بالنجوم على المنشآت الصحية التابعة للمؤسسة.", "Providing specialized technical consultancy and conducting field measurements for implementing star rating system in health facilities."),
    ("3 مشاريع شاملة تتضمن ركائز: الاستشارات، التقييم، والقياس", "3 Comprehensive Projects Including: Consultancy, Evaluation, and Measurement"),
    ("تنفيذ ثلاثة مشاريع متكاملة لوزارة الصحة، شملت جميع جوانب تطبيق نظام التصنيف بالنجوم بما في ذلك الاستشارات الفنية، التقييم المؤسسي، والقياسات الميدانية.", "Implementing three integrated projects for Ministry of Health, covering all aspects of star rating system including technical consultancy, institutional evaluation, and field measurements."),
    ("مشاريع إضافية مع جهات حكومية رائدة:", "Additional Projects with Leading Government Entities:"),
    ("تنفيذ كامل برنامج 7 نجوم لأربعة مراكز شرطة", "Complete Implementation of 7 Stars Program for Four Police Stations"),
    ("مشروع شامل لتطبيق نظام التصنيف العالمي بالنجوم على 4 مراكز شرطة رئيسية، شمل تحليل الخدمات، تطوير المعايير، التدريب، والقياس الميداني.", "Comprehensive project to implement Global Star Rating System for 4 main police stations, including service analysis, standards development, training, and field measurement."),
    ("مراكز إسعاد المتعاملين مع مخرجات مؤسسية شاملة", "Customer Happiness Centers with Comprehensive Institutional Outputs"),
    ("تطوير مراكز إسعاد المتعاملين وفق أعلى المعايير، مع تطوير دليل خدمات شامل، معايير الأداء، ومؤشرات القياس.", "Developing customer happiness centers according to highest standards, with comprehensive service manual, performance standards, and measurement indicators."),
    ("شهادة تقدير من وزير الداخلية", "Certificate of Appreciation from Minister of Interior"),
    ("شرطة عجمان", "Ajman Police"),
    ("2025", "2025"),
    ("تقديراً للجهود المتميزة في تطبيق برنامج 7 نجوم وتحقيق نتائج استثنائية في تحسين الخدمات.", "In recognition of distinguished efforts in implementing 7 Stars program and achieving exceptional results in service improvement."),
    ("جوائز داخلية من إيقوس", "Internal Awards from Ethos"),
    ("جائزة البطل المجهول", "Unsung Hero Award"),
    ("أفضل موظف", "Best Employee"),
    ("موظف العام 2020", "Employee of the Year 2020"),
    ("تقديراً للأداء المتميز والتفاني في العمل والمساهمة الفعالة في نجاح المشاريع.", "In recognition of outstanding performance, dedication to work, and effective contribution to project success."),
    ("شهادات تقدير من جهات حكومية", "Certificates of Appreciation from Government Entities"),
    ("بلدية دبي", "Dubai Municipality"),
    ("هيئة الصحة بدبي", "Dubai Health Authority"),
    ("جهات حكومية أخرى", "Other Government Entities"),
    ("شهادات تقدير متعددة من الجهات الحكومية التي تم العمل معها نظير التميز في تقديم الخدمات الاستشارية.", "Multiple certificates of appreciation from government entities for excellence in providing consulting services."),
    ("الالتزام بالتميز والتطوير المستمر", "Commitment to Excellence and Continuous Development"),
    ("تعكس هذه الجوائز والتقديرات التزاماً راسخاً بتحقيق أعلى معايير التميز المهني والمساهمة الفعالة في تطوير الخدمات الحكومية. وتمثل دافعاً مستمراً للمزيد من الإنجازات والمساهمات في رفع مستوى الأداء المؤسسي.", "These awards reflect firm commitment to achieving highest professional excellence standards and effective contribution to developing government services."),
    ("المخرجات المشتركة في المشاريع الاستشارية", "Common Deliverables in Consulting Projects"),
    ("مجموعة شاملة من المخرجات والوثائق المؤسسية التي يتم تطويرها خلال المشاريع الاستشارية لضمان الاستدامة ونقل المعرفة:", "Comprehensive set of outputs and institutional documents developed during consulting projects to ensure sustainability and knowledge transfer:"),
    ("تحليل الفجوات والتقييم التشخيصي الشامل", "Gap Analysis and Comprehensive Diagnostic Assessment"),
    ("رسم وتحليل وتحسين رحلة العميل", "Customer Journey Mapping, Analysis and Improvement"),
    ("استراتيجية تطوير وتحسين الخدمات", "Service Development and Improvement Strategy"),
    ("تطوير وتفعيل ميثاق المتعاملين", "Development and Activation of Customer Charter"),
    ("منهجية إشراك أصحاب المصلحة والشركاء", "Stakeholder and Partner Engagement Methodology"),
    ("برامج المكافآت والتقدير والتوجيه", "Rewards, Recognition and Guidance Programs"),
    ("تقسيم العملاء واتفاقيات مستوى الخدمة (SLA)", "Customer Segmentation and Service Level Agreements (SLA)"),
    ("مبادرات وخطط تحسين الخدمات", "Service Improvement Initiatives and Plans"),
    ("خطة التشغيل ومؤشرات الأداء الرئيسية", "Operations Plan and Key Performance Indicators"),
    ("تقييم وتصنيف الخدمات حسب المعايير", "Service Evaluation and Classification by Standards"),
    ("دليل معايير خدمة العملاء والسياسات", "Customer Service Standards and Policies Manual"),
    ("برامج التدريب والتطوير المتخصصة", "Specialized Training and Development Programs"),
    ("أدلة الإجراءات والعمليات التشغيلية", "Procedures and Operational Processes Manuals"),
    ("أنظمة القياس والمتابعة والتقارير", "Measurement, Follow-up and Reporting Systems"),
    ("خطط الاستدامة والتحسين المستمر", "Sustainability and Continuous Improvement Plans"),
];

/// Looks up the English rendering of an Arabic string. Anything not in
/// [`TRANSLATIONS`] is `None`.
pub fn lookup(arabic: &str) -> Option<&'static str> {
    TRANSLATIONS
        .iter()
        .find(|(key, _)| *key == arabic)
        .map(|(_, english)| *english)
}
