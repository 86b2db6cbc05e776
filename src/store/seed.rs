//! Built-in demo dataset.
//!
//! Interview dates are relative to the reference day so the schedule always
//! has something to show.

use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::department::Department;
use crate::models::enterprise::{Contact, Contract, Enterprise, EnterpriseStatus, Trial, Usage};
use crate::models::interview::{Interview, InterviewCandidate, InterviewStatus, PositionRef};
use crate::models::interviewer::Interviewer;
use crate::models::location::{LocationKind, LocationStatus, MeetingLocation};
use crate::models::position::{CompetencyDimension, Position, PositionStatus};
use chrono::{Days, NaiveDate};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn offset(today: NaiveDate, days: i64) -> NaiveDate {
    let step = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        today.checked_add_days(step)
    } else {
        today.checked_sub_days(step)
    };
    shifted.unwrap_or(today)
}

fn contact(name: &str, title: &str, phone: &str, email: &str) -> Contact {
    Contact {
        name: name.into(),
        title: title.into(),
        phone: phone.into(),
        email: email.into(),
    }
}

pub fn enterprises() -> Vec<Enterprise> {
    vec![
        Enterprise {
            id: 1,
            name: "字节跳动".into(),
            industry: "互联网".into(),
            size: "10000人以上".into(),
            location: "北京市海淀区".into(),
            status: EnterpriseStatus::Formal,
            user_count: 1200,
            subscription: "企业版".into(),
            last_active: ymd(2024, 3, 15),
            contacts: vec![
                contact("张三", "HR总监", "13800138000", "zhangsan@bytedance.com"),
                contact("李四", "技术负责人", "13800138001", "lisi@bytedance.com"),
            ],
            usage: Usage {
                total_interviews: 5000,
                total_check_ins: 4800,
                scheduled_interviews: 450,
                active_users: 800,
            },
            trial: None,
            contract: Some(Contract {
                start_date: ymd(2024, 1, 1),
                end_date: ymd(2024, 12, 31),
            }),
            sales: contact("王小明", "高级销售经理", "13800138002", "xiaoming@example.com"),
        },
        Enterprise {
            id: 2,
            name: "阿里巴巴".into(),
            industry: "电子商务".into(),
            size: "10000人以上".into(),
            location: "杭州市余杭区".into(),
            status: EnterpriseStatus::Trial,
            user_count: 800,
            subscription: "企业版".into(),
            last_active: ymd(2024, 3, 14),
            contacts: vec![contact("王五", "HR经理", "13800138002", "wangwu@alibaba.com")],
            usage: Usage {
                total_interviews: 3000,
                total_check_ins: 2800,
                scheduled_interviews: 280,
                active_users: 500,
            },
            trial: Some(Trial {
                days: 30,
                start_date: ymd(2024, 3, 1),
            }),
            contract: None,
            sales: contact("李小红", "销售经理", "13800138003", "xiaohong@example.com"),
        },
        Enterprise {
            id: 3,
            name: "腾讯科技".into(),
            industry: "互联网".into(),
            size: "10000人以上".into(),
            location: "深圳市南山区".into(),
            status: EnterpriseStatus::Expired,
            user_count: 1500,
            subscription: "企业版".into(),
            last_active: ymd(2024, 2, 28),
            contacts: vec![contact("赵六", "HR总监", "13800138004", "zhaoliu@tencent.com")],
            usage: Usage {
                total_interviews: 4200,
                total_check_ins: 4000,
                scheduled_interviews: 0,
                active_users: 0,
            },
            trial: None,
            contract: Some(Contract {
                start_date: ymd(2023, 3, 1),
                end_date: ymd(2024, 2, 29),
            }),
            sales: contact("张小强", "销售总监", "13800138005", "xiaoqiang@example.com"),
        },
        Enterprise {
            id: 4,
            name: "美团".into(),
            industry: "生活服务".into(),
            size: "10000人以上".into(),
            location: "北京市朝阳区".into(),
            status: EnterpriseStatus::Formal,
            user_count: 650,
            subscription: "专业版".into(),
            last_active: ymd(2024, 3, 12),
            contacts: vec![contact("孙八", "招聘经理", "13800138006", "sunba@meituan.com")],
            usage: Usage {
                total_interviews: 1800,
                total_check_ins: 1700,
                scheduled_interviews: 120,
                active_users: 240,
            },
            trial: None,
            contract: Some(Contract {
                start_date: ymd(2024, 2, 1),
                end_date: ymd(2025, 1, 31),
            }),
            sales: contact("王小明", "高级销售经理", "13800138002", "xiaoming@example.com"),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn candidate(
    id: u32,
    name: &str,
    role: (&str, &str),
    salary: &str,
    email: &str,
    phone: &str,
    location: &str,
    applied: &str,
    status: CandidateStatus,
) -> Candidate {
    Candidate {
        id,
        name: name.into(),
        current_position: role.0.into(),
        current_company: role.1.into(),
        salary: salary.into(),
        email: email.into(),
        phone: phone.into(),
        location: location.into(),
        applied_position: applied.into(),
        status,
    }
}

pub fn candidates() -> Vec<Candidate> {
    use CandidateStatus::*;
    vec![
        candidate(1, "张三", ("高级前端工程师", "腾讯科技"), "40-50万", "zhangsan@example.com", "13800138000", "北京", "技术专家", Interviewing),
        candidate(2, "李四", ("产品经理", "阿里巴巴"), "35-45万", "lisi@example.com", "13800138001", "杭州", "产品经理", Screening),
        candidate(3, "王五", ("算法工程师", "字节跳动"), "45-60万", "wangwu@example.com", "13800138002", "北京", "高级算法工程师", Passed),
        candidate(4, "赵六", ("后端工程师", "美团"), "30-40万", "zhaoliu@example.com", "13800138003", "北京", "技术专家", Rejected),
        candidate(5, "钱七", ("DevOps工程师", "京东"), "35-45万", "qianqi@example.com", "13800138004", "北京", "DevOps专家", ToSchedule),
        candidate(6, "孙八", ("前端工程师", "百度"), "30-38万", "sunba@example.com", "13800138005", "北京", "前端架构师", Interviewing),
        candidate(7, "周九", ("产品运营", "快手"), "25-32万", "zhoujiu@example.com", "13800138006", "北京", "产品经理", AwaitingFeedback),
        candidate(8, "吴十", ("数据科学家", "网易"), "40-55万", "wushi@example.com", "13800138007", "杭州", "高级算法工程师", Screening),
        candidate(9, "郑一", ("SRE工程师", "小米"), "32-42万", "zhengyi@example.com", "13800138008", "北京", "DevOps专家", Screening),
        candidate(10, "冯二", ("前端技术专家", "滴滴"), "50-65万", "fenger@example.com", "13800138009", "北京", "前端架构师", AwaitingFeedback),
        candidate(11, "陈三", ("全栈工程师", "携程"), "30-40万", "chensan@example.com", "13800138010", "上海", "技术专家", ToSchedule),
        candidate(12, "褚四", ("产品总监", "拼多多"), "60-80万", "chusi@example.com", "13800138011", "上海", "产品经理", Passed),
    ]
}

fn dimension(key: &str, label: &str, weight: u32, description: &str) -> CompetencyDimension {
    CompetencyDimension {
        key: key.into(),
        label: label.into(),
        weight,
        description: description.into(),
    }
}

fn default_competency_model() -> Vec<CompetencyDimension> {
    vec![
        dimension("technical", "专业技能", 30, "Depth and breadth of the tech stack, architecture design"),
        dimension("leadership", "领导力", 25, "Team management and technical decision making"),
        dimension("communication", "沟通能力", 15, "Cross-team collaboration and requirement analysis"),
        dimension("innovation", "创新能力", 15, "Technical innovation and problem solving"),
        dimension("execution", "执行力", 15, "Driving projects and reaching goals"),
    ]
}

fn position(
    id: u32,
    title: &str,
    department: &str,
    salary: &str,
    status: PositionStatus,
    created: NaiveDate,
    updated: NaiveDate,
) -> Position {
    Position {
        id,
        title: title.into(),
        department: department.into(),
        employment_type: "全职".into(),
        location: "北京".into(),
        salary: salary.into(),
        status,
        created_at: created,
        updated_at: updated,
        competency_model: default_competency_model(),
    }
}

pub fn positions() -> Vec<Position> {
    use PositionStatus::*;
    vec![
        position(1, "前端架构师", "技术部", "40-60K·15薪", Active, ymd(2024, 3, 15), ymd(2024, 3, 15)),
        position(2, "高级算法工程师", "算法部", "45-70K·15薪", Active, ymd(2024, 3, 14), ymd(2024, 3, 14)),
        position(3, "产品经理", "产品部", "35-50K·15薪", Active, ymd(2024, 3, 13), ymd(2024, 3, 13)),
        position(4, "技术专家", "技术部", "50-80K·16薪", Active, ymd(2024, 3, 10), ymd(2024, 3, 12)),
        position(5, "DevOps专家", "运维部", "35-55K·15薪", Closed, ymd(2024, 2, 20), ymd(2024, 3, 1)),
    ]
}

#[allow(clippy::too_many_arguments)]
fn interview(
    id: u32,
    date: NaiveDate,
    time: &str,
    who: (u32, &str, &str, &str),
    applied: (u32, &str),
    interviewer: &str,
    location: &str,
    status: InterviewStatus,
) -> Interview {
    Interview {
        id,
        date,
        time: time.into(),
        candidate: InterviewCandidate {
            id: who.0,
            name: who.1.into(),
            current_position: who.2.into(),
            company: who.3.into(),
            apply_position: PositionRef {
                id: applied.0,
                name: applied.1.into(),
            },
        },
        interviewer: interviewer.into(),
        location: location.into(),
        status,
    }
}

pub fn interviews(today: NaiveDate) -> Vec<Interview> {
    use InterviewStatus::*;
    vec![
        interview(1, today, "14:30-15:30", (1, "张三", "高级前端工程师", "字节跳动"), (1, "前端架构师"), "李工", "会议室A", Pending),
        interview(2, today, "10:00-11:00", (2, "李四", "产品经理", "阿里巴巴"), (3, "产品经理"), "王经理", "腾讯会议", Pending),
        interview(3, today, "16:00-17:00", (3, "王五", "算法工程师", "字节跳动"), (2, "高级算法工程师"), "陈博士", "会议室B", Pending),
        interview(4, offset(today, 1), "09:30-10:30", (4, "赵六", "后端工程师", "美团"), (4, "技术专家"), "李工", "会议室A", Pending),
        interview(5, offset(today, -2), "15:00-16:00", (5, "钱七", "DevOps工程师", "京东"), (5, "DevOps专家"), "张工", "腾讯会议", Completed),
        interview(6, offset(today, 3), "11:00-12:00", (6, "孙八", "前端工程师", "百度"), (1, "前端架构师"), "李工", "会议室B", Cancelled),
        interview(7, offset(today, 7), "14:00-15:00", (7, "周九", "产品运营", "快手"), (3, "产品经理"), "王经理", "会议室A", Pending),
    ]
}

pub fn departments() -> Vec<Department> {
    let dept = |id, name: &str, code: &str, parent_id, description: &str| Department {
        id,
        name: name.into(),
        code: code.into(),
        parent_id,
        description: description.into(),
    };

    vec![
        dept(1, "技术部", "TECH", None, "Engineering and architecture"),
        dept(4, "产品部", "PROD", None, "Product planning and design"),
        dept(2, "前端组", "TECH-FE", Some(1), "Front-end development"),
        dept(3, "后端组", "TECH-BE", Some(1), "Back-end development"),
        dept(5, "算法部", "ALGO", None, "Machine learning and algorithms"),
        dept(6, "运维部", "OPS", Some(1), "Infrastructure and operations"),
    ]
}

pub fn interviewers() -> Vec<Interviewer> {
    let person = |id, name: &str, title: &str, department: &str, email: &str, phone: &str| Interviewer {
        id,
        name: name.into(),
        title: title.into(),
        department: department.into(),
        email: email.into(),
        phone: phone.into(),
    };

    vec![
        person(1, "张三", "技术专家", "技术部", "zhangsan@example.com", "13800138001"),
        person(2, "李四", "产品专家", "产品部", "lisi@example.com", "13800138002"),
        person(3, "王五", "架构师", "技术部", "wangwu@example.com", "13800138003"),
    ]
}

pub fn locations() -> Vec<MeetingLocation> {
    vec![
        MeetingLocation {
            id: 1,
            name: "会议室A".into(),
            kind: LocationKind::Onsite,
            capacity: Some(8),
            address: Some("北京市海淀区科技园区1号楼3层".into()),
            status: LocationStatus::Available,
        },
        MeetingLocation {
            id: 2,
            name: "会议室B".into(),
            kind: LocationKind::Onsite,
            capacity: Some(6),
            address: Some("北京市海淀区科技园区1号楼3层".into()),
            status: LocationStatus::Occupied,
        },
        MeetingLocation {
            id: 3,
            name: "腾讯会议".into(),
            kind: LocationKind::Online,
            capacity: None,
            address: None,
            status: LocationStatus::Available,
        },
    ]
}
